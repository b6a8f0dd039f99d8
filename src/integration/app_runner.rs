use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    config::Config,
    core::{translator::translate_raw_to_domain, update::update, AppState, Msg, RawMsg},
    infrastructure::{catalog::DemoCatalog, oracle::DemoOracle, tui},
    integration::cmd_executor::CmdExecutor,
    presentation::components::Components,
};

/// Drives the Elm loop: terminal events in, messages through the pure
/// update, commands out to the executor, frames out to the terminal.
pub struct AppRunner {
    state: AppState,
    tick_rate: f64,
    frame_rate: f64,
    executor: CmdExecutor,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    components: Components,
}

impl AppRunner {
    pub fn new(config: Config, tick_rate: f64, frame_rate: f64) -> Self {
        let oracle = Arc::new(DemoOracle::from_config(&config.demo));
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let state = AppState::from_catalog_with_config(&DemoCatalog, config);
        Self {
            state,
            tick_rate,
            frame_rate,
            executor: CmdExecutor::new(msg_tx, oracle),
            msg_rx,
            components: Components::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = tui::Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        loop {
            if let Some(event) = tui.next().await {
                match event {
                    tui::Event::Quit => self.dispatch(RawMsg::Quit)?,
                    tui::Event::Tick => {
                        self.dispatch(RawMsg::Tick(chrono::Local::now().naive_local()))?;
                    }
                    tui::Event::Render => self.render(&mut tui)?,
                    tui::Event::Key(key) => self.dispatch(RawMsg::Key(key))?,
                    tui::Event::Paste(text) => self.dispatch(RawMsg::Paste(text))?,
                    tui::Event::Resize(width, height) => {
                        tui.resize(ratatui::prelude::Rect::new(0, 0, width, height))?;
                        self.render(&mut tui)?;
                    }
                    tui::Event::Error => {
                        self.dispatch(RawMsg::Error("terminal event stream failed".into()))?;
                    }
                    _ => {}
                }
            }

            // Oracle completions queued by the executor's tasks.
            while let Ok(msg) = self.msg_rx.try_recv() {
                self.apply(msg)?;
            }

            if self.state.system.should_suspend {
                tui.suspend()?;
                self.dispatch(RawMsg::Resume)?;
                tui = tui::Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.state.system.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn dispatch(&mut self, raw: RawMsg) -> Result<()> {
        for msg in translate_raw_to_domain(raw, &self.state) {
            self.apply(msg)?;
        }
        Ok(())
    }

    fn apply(&mut self, msg: Msg) -> Result<()> {
        let (next, cmds) = update(msg, std::mem::take(&mut self.state));
        self.state = next;
        self.executor.execute_all(cmds)
    }

    fn render(&mut self, tui: &mut tui::Tui) -> Result<()> {
        let state = &self.state;
        let components = &mut self.components;
        tui.draw(|frame| components.render(frame, state))?;
        Ok(())
    }
}
