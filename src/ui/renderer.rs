//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. It dispatches on the
//! screen variant (loader, error, empty, list, detail) and ensures proper
//! layout filling.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ScreenViewModel, UIViewModel};

/// Renders the full UI for the current state to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.screen {
        ScreenViewModel::Loader(banner) => {
            components::render_banner_mode(vm, banner, &theme.colors.text_dim, theme, cols, rows);
        }
        ScreenViewModel::Error(banner) => {
            components::render_banner_mode(vm, banner, &theme.colors.error_fg, theme, cols, rows);
        }
        ScreenViewModel::Empty(banner) => {
            components::render_banner_mode(
                vm,
                banner,
                &theme.colors.empty_state_fg,
                theme,
                cols,
                rows,
            );
        }
        ScreenViewModel::List(list) => {
            components::render_list_mode(vm, list, theme, cols, rows);
        }
        ScreenViewModel::Detail(detail) => {
            components::render_detail_mode(vm, detail, theme, cols, rows);
        }
    }
}
