//! Episode browser TUI

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use episode_browser::action::Action;
use episode_browser::api::CatalogClient;
use episode_browser::components::{BrowserScreen, BrowserScreenProps, Component};
use episode_browser::config::{Args, Config};
use episode_browser::effect::Effect;
use episode_browser::logging;
use episode_browser::reducer::reducer;
use episode_browser::state::AppState;
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// One task slot for character batches; a new selection replaces the running request.
const CHARACTERS_TASK: &str = "characters";
const EPISODES_TASK: &str = "episodes";

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum BrowserComponentId {
    Browser,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum BrowserContext {
    Main,
}

impl EventRoutingState<BrowserComponentId, BrowserContext> for AppState {
    fn focused(&self) -> Option<BrowserComponentId> {
        Some(BrowserComponentId::Browser)
    }

    fn modal(&self) -> Option<BrowserComponentId> {
        None
    }

    fn binding_context(&self, _id: BrowserComponentId) -> BrowserContext {
        BrowserContext::Main
    }

    fn default_context(&self) -> BrowserContext {
        BrowserContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        base_url,
        log_file,
        debug: debug_args,
    } = Args::parse();
    let config = Config::from_args(base_url, log_file);

    logging::init(&config.log_file)?;
    tracing::info!(base_url = %config.base_url, "starting episode browser");

    let debug = DebugSession::new(debug_args);

    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::default()) })
        .await
        .map_err(debug_error)?;
    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);
    let client = CatalogClient::new(config.base_url.clone());

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, client, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    tracing::info!("episode browser exited");
    Ok(())
}

struct BrowserUi {
    screen: BrowserScreen,
}

impl BrowserUi {
    fn new() -> Self {
        Self {
            screen: BrowserScreen::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<BrowserComponentId>,
    ) {
        event_ctx.set_component_area(BrowserComponentId::Browser, area);
        let props = BrowserScreenProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.screen.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = BrowserScreenProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.screen.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    client: CatalogClient,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(BrowserUi::new()));
    let mut bus: EventBus<AppState, Action, BrowserComponentId, BrowserContext> =
        EventBus::new();
    let keybindings: Keybindings<BrowserContext> = Keybindings::new();

    let ui_browser = Rc::clone(&ui);
    bus.register(BrowserComponentId::Browser, move |event, state| {
        ui_browser.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize so the grid picks its column count
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::EpisodesFetch),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(&client, effect, ctx),
        )
        .await
}

/// Runs effects as tasks; failures are logged and reported back as actions
fn handle_effect(client: &CatalogClient, effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::LoadEpisodes => {
            let client = client.clone();
            ctx.tasks().spawn(EPISODES_TASK, async move {
                match client.fetch_episodes().await {
                    Ok(page) => Action::EpisodesDidLoad(page),
                    Err(e) => {
                        tracing::error!(error = %e, "error fetching episodes");
                        Action::EpisodesDidError(e.to_string())
                    }
                }
            });
        }
        Effect::LoadMoreEpisodes { url } => {
            let client = client.clone();
            ctx.tasks().spawn(EPISODES_TASK, async move {
                match client.fetch_episodes_at(&url).await {
                    Ok(page) => Action::EpisodesDidAppend(page),
                    Err(e) => {
                        tracing::error!(error = %e, url = %url, "error fetching more episodes");
                        Action::EpisodesDidError(e.to_string())
                    }
                }
            });
        }
        Effect::LoadCharacters { episode_id, ids } => {
            let client = client.clone();
            ctx.tasks().spawn(CHARACTERS_TASK, async move {
                match client.fetch_characters(&ids).await {
                    Ok(characters) => Action::CharactersDidLoad {
                        episode_id,
                        characters,
                    },
                    Err(e) => {
                        tracing::error!(
                            error = %e,
                            episode_id,
                            "error fetching characters for episode"
                        );
                        Action::CharactersDidError {
                            episode_id,
                            error: e.to_string(),
                        }
                    }
                }
            });
        }
    }
}
