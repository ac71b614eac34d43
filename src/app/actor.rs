//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use crate::models::Locale;

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        locale: Locale,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(locale),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    tracing::debug!(id = response.id(), "Network response received");
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Block focus
            UiEvent::FocusNext => self.state.focus_next(),
            UiEvent::FocusPrev => self.state.focus_prev(),

            // Grab-and-move reordering
            UiEvent::Grab => self.state.grab(),
            UiEvent::Drop => self.state.drop_block(),
            UiEvent::MoveUp => self.state.move_up(),
            UiEvent::MoveDown => self.state.move_down(),

            // Search query editing
            UiEvent::EditQuery => self.state.start_query_edit(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::QueryChar(c) => self.state.query_char(c),
            UiEvent::QueryBackspace => self.state.query_backspace(),
            UiEvent::QueryCursorLeft => self.state.query_cursor_left(),
            UiEvent::QueryCursorRight => self.state.query_cursor_right(),

            // Directory
            UiEvent::NextCategory => self.state.next_category(),
            UiEvent::PrevCategory => self.state.prev_category(),
            UiEvent::NextTool => self.state.next_tool(),
            UiEvent::PrevTool => self.state.prev_tool(),

            // Locale
            UiEvent::ToggleLocale => self.state.toggle_locale(),

            // Add-tool form
            UiEvent::OpenAddTool => self.state.open_add_tool(),
            UiEvent::AddToolChar(c) => self.state.add_tool_char(c),
            UiEvent::AddToolBackspace => self.state.add_tool_backspace(),
            UiEvent::AddToolNextField => self.state.add_tool_next_field(),
            UiEvent::AddToolPrevField => self.state.add_tool_prev_field(),
            UiEvent::AddToolLeft => self.state.add_tool_left(),
            UiEvent::AddToolRight => self.state.add_tool_right(),
            UiEvent::SubmitAddTool => self.state.submit_add_tool(),
            UiEvent::CancelAddTool => self.state.cancel_add_tool(),

            // Settings
            UiEvent::OpenSettings => self.state.open_settings(),
            UiEvent::SelectAccent(accent) => self.state.select_accent(accent),
            UiEvent::CloseSettings => self.state.close_settings(),

            // Auth
            UiEvent::OpenLogin => self.state.open_login(),
            UiEvent::LoginChar(c) => self.state.login_char(c),
            UiEvent::LoginBackspace => self.state.login_backspace(),
            UiEvent::LoginNextField => self.state.login_next_field(),
            UiEvent::SubmitSignIn => {
                if let Some(cmd) = self.state.submit_sign_in() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::SubmitSignUp => {
                if let Some(cmd) = self.state.submit_sign_up() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::CancelLogin => self.state.cancel_login(),
            UiEvent::SignOut => {
                if let Some(cmd) = self.state.sign_out() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Chat
            UiEvent::OpenChat => self.state.open_chat(),
            UiEvent::ChatChar(c) => self.state.chat_char(c),
            UiEvent::ChatBackspace => self.state.chat_backspace(),
            UiEvent::SendChat => {
                if let Some(cmd) = self.state.send_chat() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::ChatScrollUp => self.state.chat_scroll_up(),
            UiEvent::ChatScrollDown => self.state.chat_scroll_down(),
            UiEvent::CloseChat => self.state.close_chat(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
