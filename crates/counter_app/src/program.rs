//! Program lifecycle and event loop.
//!
//! [`Program`] hosts a [`Model`] in a terminal: it sets the terminal up,
//! turns crossterm events into messages, runs `update`, executes returned
//! commands, and repaints when the view changes.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use tracing::{debug, info, warn};

use counter_widget::{Cmd, InterruptMsg, KeyType, Message, Model, QuitMsg, WindowSizeMsg};

use crate::input::{from_crossterm_key, from_crossterm_mouse};

/// Errors that can occur when running a program.
///
/// # Example
///
/// ```rust,ignore
/// use counter_app::program::{Error, Program};
///
/// match Program::new(widget).run() {
///     Ok(model) => println!("final count {}", model.state().count()),
///     Err(Error::RawModeFailure { .. }) => eprintln!("not an interactive terminal"),
///     Err(e) => eprintln!("program error: {e}"),
/// }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error during terminal operations.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode.
    ///
    /// Usually means the program is not attached to a TTY.
    #[error("failed to {action} raw mode: {source}")]
    RawModeFailure {
        /// Whether we were trying to enable or disable raw mode.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to enter or exit alternate screen.
    #[error("failed to {action} alternate screen: {source}")]
    AltScreenFailure {
        /// Whether we were trying to enter or exit alt screen.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to poll for terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(io::Error),

    /// Failed to render the view to the terminal.
    #[error("failed to render view: {0}")]
    Render(io::Error),
}

/// A specialized [`Result`] type for program operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Program options.
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Use alternate screen buffer.
    pub alt_screen: bool,
    /// Capture mouse clicks.
    pub mouse: bool,
    /// Skip terminal setup and event polling.
    pub custom_io: bool,
    /// Target frames per second for rendering.
    pub fps: u32,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: false,
            mouse: false,
            custom_io: false,
            fps: 60,
        }
    }
}

/// Handle to a program running on a background thread.
///
/// Returned by [`Program::start`].
pub struct ProgramHandle<M: Model> {
    tx: Sender<Message>,
    handle: Option<thread::JoinHandle<Result<M>>>,
}

impl<M: Model> ProgramHandle<M> {
    /// Send a message to the running program.
    ///
    /// Returns `false` if the program has already exited.
    pub fn send<T: Into<Message>>(&self, msg: T) -> bool {
        self.tx.send(msg.into()).is_ok()
    }

    /// Request the program to quit.
    pub fn quit(&self) {
        let _ = self.tx.send(Message::new(QuitMsg));
    }

    /// Wait for the program to finish and return the final model.
    pub fn wait(mut self) -> Result<M> {
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| Error::Io(io::Error::other("program thread panicked")))?,
            None => Err(Error::Io(io::Error::other("program already joined"))),
        }
    }

    /// Check if the program is still running.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

/// The main program runner.
///
/// # Example
///
/// ```rust,ignore
/// use counter_app::program::Program;
/// use counter_widget::CounterWidget;
///
/// let final_widget = Program::new(CounterWidget::new())
///     .with_alt_screen()
///     .with_mouse()
///     .run()?;
/// ```
pub struct Program<M: Model> {
    model: M,
    options: ProgramOptions,
    external_rx: Option<Receiver<Message>>,
    output: Option<Box<dyn Write + Send>>,
}

impl<M: Model> Program<M> {
    /// Create a new program with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: ProgramOptions::default(),
            external_rx: None,
            output: None,
        }
    }

    /// Apply a full set of options.
    #[must_use]
    pub fn with_options(mut self, options: ProgramOptions) -> Self {
        let custom_io = self.options.custom_io;
        self.options = options;
        self.options.custom_io |= custom_io;
        self.options.fps = self.options.fps.clamp(1, 120);
        self
    }

    /// Forward messages from an external channel into the event loop.
    #[must_use]
    pub fn with_input_receiver(mut self, rx: Receiver<Message>) -> Self {
        self.external_rx = Some(rx);
        self
    }

    /// Write render output to the given writer instead of stdout.
    ///
    /// This enables custom I/O mode.
    #[must_use]
    pub fn with_output<W: Write + Send + 'static>(mut self, output: W) -> Self {
        self.output = Some(Box::new(output));
        self.options.custom_io = true;
        self
    }

    /// Use alternate screen buffer (full-screen mode).
    #[must_use]
    pub fn with_alt_screen(mut self) -> Self {
        self.options.alt_screen = true;
        self
    }

    /// Capture mouse clicks.
    #[must_use]
    pub fn with_mouse(mut self) -> Self {
        self.options.mouse = true;
        self
    }

    /// Set the target frames per second, clamped to 1-120.
    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.options.fps = fps.clamp(1, 120);
        self
    }

    /// Skip terminal setup and crossterm polling.
    ///
    /// Messages must then arrive through [`Program::with_input_receiver`] or
    /// a [`ProgramHandle`].
    #[must_use]
    pub fn with_custom_io(mut self) -> Self {
        self.options.custom_io = true;
        self
    }

    /// The options the program will run with.
    pub fn options(&self) -> &ProgramOptions {
        &self.options
    }

    /// Run the program with a custom writer.
    pub fn run_with_writer<W: Write + Send + 'static>(self, mut writer: W) -> Result<M> {
        let options = self.options.clone();
        debug!(?options, "starting program");

        if !options.custom_io {
            enable_raw_mode().map_err(|source| Error::RawModeFailure {
                action: "enable",
                source,
            })?;
        }

        let setup = Self::setup_terminal(&options, &mut writer);
        let result = match setup {
            Ok(()) => self.event_loop(&mut writer),
            Err(e) => Err(e),
        };

        Self::restore_terminal(&options, &mut writer);
        if !options.custom_io {
            if let Err(e) = disable_raw_mode() {
                warn!(error = %e, "failed to disable raw mode");
            }
        }

        match &result {
            Ok(_) => info!("program exited"),
            Err(e) => warn!(error = %e, "program failed"),
        }
        result
    }

    fn setup_terminal<W: Write>(options: &ProgramOptions, writer: &mut W) -> Result<()> {
        if options.alt_screen {
            execute!(writer, EnterAlternateScreen).map_err(|source| Error::AltScreenFailure {
                action: "enter",
                source,
            })?;
        }
        execute!(writer, Hide)?;
        if options.mouse {
            execute!(writer, EnableMouseCapture)?;
        }
        Ok(())
    }

    fn restore_terminal<W: Write>(options: &ProgramOptions, writer: &mut W) {
        if options.mouse {
            let _ = execute!(writer, DisableMouseCapture);
        }
        let _ = execute!(writer, Show);
        if options.alt_screen {
            let _ = execute!(writer, LeaveAlternateScreen);
        }
    }

    /// Run the program on stdout (or the configured output) and return the
    /// final model.
    pub fn run(mut self) -> Result<M> {
        if let Some(output) = self.output.take() {
            return self.run_with_writer(output);
        }
        self.run_with_writer(io::stdout())
    }

    /// Start the program on a background thread and return a handle for
    /// injecting messages.
    pub fn start(mut self) -> ProgramHandle<M> {
        let (tx, rx) = mpsc::channel();
        self.external_rx = Some(rx);

        let handle = thread::spawn(move || self.run());

        ProgramHandle {
            tx,
            handle: Some(handle),
        }
    }

    fn event_loop<W: Write>(mut self, writer: &mut W) -> Result<M> {
        let (tx, rx): (Sender<Message>, Receiver<Message>) = mpsc::channel();

        if let Some(ext_rx) = self.external_rx.take() {
            let tx_clone = tx.clone();
            thread::spawn(move || {
                while let Ok(msg) = ext_rx.recv() {
                    if tx_clone.send(msg).is_err() {
                        break;
                    }
                }
            });
        }

        if !self.options.custom_io {
            if let Ok((width, height)) = terminal::size() {
                let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
            }
        }

        if let Some(cmd) = self.model.init() {
            Self::handle_command(cmd, tx.clone());
        }

        let mut last_view = String::new();
        self.render(writer, &mut last_view)?;

        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(self.options.fps));

        loop {
            if !self.options.custom_io
                && event::poll(frame_duration).map_err(Error::EventPoll)?
            {
                match event::read().map_err(Error::EventPoll)? {
                    Event::Key(key_event) => {
                        if key_event.kind == KeyEventKind::Press {
                            let key_msg = from_crossterm_key(key_event.code, key_event.modifiers);
                            if key_msg.key_type == KeyType::CtrlC {
                                let _ = tx.send(Message::new(InterruptMsg));
                            } else {
                                let _ = tx.send(Message::new(key_msg));
                            }
                        }
                    }
                    Event::Mouse(mouse_event) => {
                        let _ = tx.send(Message::new(from_crossterm_mouse(mouse_event)));
                    }
                    Event::Resize(width, height) => {
                        let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
                    }
                    Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
                }
            }

            let mut needs_render = false;
            while let Ok(msg) = rx.try_recv() {
                if msg.is::<QuitMsg>() {
                    debug!("quit requested");
                    return Ok(self.model);
                }
                if msg.is::<InterruptMsg>() {
                    debug!("interrupted");
                    return Ok(self.model);
                }

                if let Some(cmd) = self.model.update(msg) {
                    Self::handle_command(cmd, tx.clone());
                }
                needs_render = true;
            }

            if needs_render {
                self.render(writer, &mut last_view)?;
            }

            if self.options.custom_io {
                thread::sleep(frame_duration);
            }
        }
    }

    fn handle_command(cmd: Cmd, tx: Sender<Message>) {
        thread::spawn(move || {
            if let Some(msg) = cmd.execute() {
                let _ = tx.send(msg);
            }
        });
    }

    fn render<W: Write>(&self, writer: &mut W, last_view: &mut String) -> Result<()> {
        let view = self.model.view();
        if view == *last_view {
            return Ok(());
        }

        execute!(writer, MoveTo(0, 0), Clear(ClearType::All)).map_err(Error::Render)?;
        // Raw mode disables the implicit carriage return on newline.
        let painted = view.replace('\n', "\r\n");
        write!(writer, "{painted}").map_err(Error::Render)?;
        writer.flush().map_err(Error::Render)?;

        *last_view = view;
        Ok(())
    }
}
