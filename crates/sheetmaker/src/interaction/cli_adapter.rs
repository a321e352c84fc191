//! CLI adapter implementation using dialoguer for interactive prompts
//!
//! This module provides `CliAdapter`, which implements `InteractionAdapter` for
//! terminal-based user interaction. When stdin is not a terminal the adapter
//! reads plain lines instead, so sessions can be scripted through a pipe.

use std::collections::HashMap;
use std::fmt::Write as FmtWrite;
use std::io::{BufRead, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use console::Style;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::Input;
use dialoguer::theme::Theme;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use sheetmaker_core::interaction::{
    InteractionAdapter, InteractionError, InteractionResult, ProgressHandle,
};

use crate::colors::COLORS;
use crate::splash;

/// Global flag to track if Ctrl+C was pressed
static CANCELLED: AtomicBool = AtomicBool::new(false);

/// Check if cancellation was requested
fn is_cancelled() -> bool {
    CANCELLED.load(Ordering::SeqCst)
}

/// Set up the global Ctrl+C handler
pub fn setup_ctrl_c_handler() {
    static HANDLER_SET: AtomicBool = AtomicBool::new(false);

    if HANDLER_SET.swap(true, Ordering::SeqCst) {
        return;
    }

    if let Err(e) = ctrlc::set_handler(move || {
        CANCELLED.store(true, Ordering::SeqCst);
        eprintln!();
    }) {
        tracing::warn!("could not set Ctrl+C handler: {}", e);
    }
}

/// Prompt theme: cyan question line, answer echoed after it
struct PromptTheme {
    prompt_style: Style,
    active_style: Style,
    hint_style: Style,
}

impl PromptTheme {
    fn new() -> Self {
        Self {
            prompt_style: Style::new().cyan().bold(),
            active_style: Style::new().cyan(),
            hint_style: Style::new().dim(),
        }
    }
}

impl Theme for PromptTheme {
    fn format_prompt(&self, f: &mut dyn FmtWrite, prompt: &str) -> std::fmt::Result {
        write!(f, "{}", self.prompt_style.apply_to(format!("? {}", prompt)))
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        default: Option<&str>,
    ) -> std::fmt::Result {
        match default {
            Some(d) => write!(
                f,
                "{} {}",
                self.prompt_style.apply_to(format!("? {}", prompt)),
                self.hint_style.apply_to(format!("({})", d))
            ),
            None => write!(f, "{}", self.prompt_style.apply_to(format!("? {}", prompt))),
        }
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        sel: &str,
    ) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.prompt_style.apply_to(format!("? {}", prompt)),
            self.active_style.apply_to(sel)
        )
    }
}

/// CLI adapter for terminal-based user interaction
pub struct CliAdapter {
    is_tty: bool,
    stdout_tty: bool,
    quiet: bool,
    progress_counter: AtomicU64,
    active_progress: Arc<Mutex<HashMap<u64, ProgressBar>>>,
}

impl CliAdapter {
    pub fn new(quiet: bool) -> Self {
        setup_ctrl_c_handler();
        Self {
            is_tty: std::io::stdin().is_terminal(),
            stdout_tty: std::io::stdout().is_terminal(),
            quiet,
            progress_counter: AtomicU64::new(0),
            active_progress: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    #[allow(dead_code)]
    pub fn with_tty(is_tty: bool) -> Self {
        setup_ctrl_c_handler();
        Self {
            is_tty,
            stdout_tty: is_tty,
            quiet: true,
            progress_counter: AtomicU64::new(0),
            active_progress: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    #[allow(dead_code)]
    pub fn is_tty(&self) -> bool {
        self.is_tty
    }

    fn check_cancelled(&self) -> InteractionResult<()> {
        if is_cancelled() {
            Err(InteractionError::Cancelled)
        } else {
            Ok(())
        }
    }

    fn convert_dialoguer_error(err: dialoguer::Error) -> InteractionError {
        if is_cancelled() {
            return InteractionError::Cancelled;
        }
        InteractionError::Io(err.to_string())
    }

    /// Read one line from a non-terminal stdin
    fn read_plain_line(&self, prompt: &str) -> InteractionResult<String> {
        println!("{}", prompt);
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| InteractionError::Io(e.to_string()))?;
        if read == 0 {
            return Err(InteractionError::InputClosed);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Default for CliAdapter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl InteractionAdapter for CliAdapter {
    fn ask_text(&self, prompt: &str, default: Option<&str>) -> InteractionResult<String> {
        self.check_cancelled()?;

        if !self.is_tty {
            return self.read_plain_line(prompt);
        }

        let theme = PromptTheme::new();
        let mut input: Input<String> = Input::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(d) = default {
            input = input.default(d.to_string());
        }

        let answer = input.interact_text().map_err(Self::convert_dialoguer_error)?;
        self.check_cancelled()?;
        Ok(answer)
    }

    fn clear_and_show_title(&self) {
        let mut stdout = std::io::stdout();

        if self.stdout_tty {
            if let Err(e) = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0)) {
                tracing::debug!("could not clear screen: {}", e);
            }
        } else {
            writeln!(stdout).ok();
        }

        if !self.quiet {
            splash::write_banner(&mut stdout, self.stdout_tty).ok();
        }
        writeln!(stdout).ok();
        stdout.flush().ok();
    }

    fn show_menu(&self, items: &[String]) {
        for item in items {
            println!("  {}", item.style(COLORS.active));
        }
        println!();
        let _ = std::io::stdout().flush();
    }

    fn start_progress(&self, message: &str) -> ProgressHandle {
        let id = self.progress_counter.fetch_add(1, Ordering::SeqCst);

        if self.stdout_tty {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
                pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
            }
            pb.set_message(message.to_string());
            pb.enable_steady_tick(std::time::Duration::from_millis(100));

            if let Ok(mut progress_map) = self.active_progress.lock() {
                progress_map.insert(id, pb);
            }
        } else {
            println!("{}", message);
        }

        ProgressHandle::new(id, message)
    }

    fn end_progress(&self, handle: ProgressHandle, success: bool) {
        if let Ok(mut progress_map) = self.active_progress.lock() {
            if let Some(pb) = progress_map.remove(&handle.id()) {
                let elapsed = format!("{:.1}s", pb.elapsed().as_secs_f64());
                pb.finish_and_clear();

                if success {
                    println!("{} {} [{}]", "✓".green(), handle.message().green(), elapsed);
                } else {
                    println!("{} {} [{}]", "✗".red(), handle.message().red(), elapsed);
                }
            }
        }
    }

    fn print_info(&self, message: &str) {
        println!("{}", message);
        let _ = std::io::stdout().flush();
    }

    fn print_warning(&self, message: &str) {
        println!("{}", message.style(COLORS.warning));
        let _ = std::io::stdout().flush();
    }

    fn print_error(&self, message: &str) {
        eprintln!("{} {}", "error:".style(COLORS.fail), message.style(COLORS.fail));
        let _ = std::io::stderr().flush();
    }

    fn print_success(&self, message: &str) {
        println!("{} {}", "✓".style(COLORS.success), message.style(COLORS.success));
        let _ = std::io::stdout().flush();
    }

    fn print_header(&self, message: &str) {
        println!("{}", message.style(COLORS.active));
        let _ = std::io::stdout().flush();
    }
}
