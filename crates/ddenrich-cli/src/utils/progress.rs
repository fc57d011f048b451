use ddenrich::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, warn};

const SPINNER_TICK_MS: u64 = 100;

/// Renders core progress events on stderr.
///
/// A phase shows as a spinner. A shuffled side shows as a bar counting trials, and is
/// replaced by a one-line summary once the side is done.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target);
        bar.finish_and_clear();
        Self {
            bar: Arc::new(Mutex::new(bar)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = self.bar.clone();
        Box::new(move |event: Progress| match bar.lock() {
            Ok(bar) => render(&bar, event),
            Err(_) => warn!("Progress bar lock poisoned; dropping progress event."),
        })
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn render(bar: &ProgressBar, event: Progress) {
    match event {
        Progress::PhaseStart { name } => {
            bar.reset();
            bar.set_length(0);
            bar.set_style(phase_style());
            bar.set_message(name);
            bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        }
        Progress::PhaseFinish => {
            bar.disable_steady_tick();
            bar.finish_with_message(format!("✓ {}", bar.message()));
        }
        Progress::ShuffleStart { side, trials } => {
            bar.disable_steady_tick();
            bar.reset();
            bar.set_style(trial_style());
            bar.set_length(trials);
            bar.set_message(format!("Shuffling {}", side));
        }
        Progress::TrialComplete => bar.inc(1),
        Progress::ShuffleFinish { side, combinations } => {
            if let Some(total) = bar.length() {
                bar.set_position(total);
            }
            bar.finish_with_message(format!(
                "✓ Shuffled {}: {} combinations",
                side, combinations
            ));
        }
        Progress::Message(note) => {
            debug!(%note, "Workflow note.");
            bar.suspend(|| eprintln!("  · {}", note));
        }
    }
}

fn phase_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg} ({elapsed})")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn trial_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{msg:<14} {wide_bar:.cyan/blue} {pos:>5}/{len} trials [{elapsed_precise}<{eta}]",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("=> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddenrich::core::models::interaction::Side;

    fn hidden() -> CliProgressHandler {
        CliProgressHandler::with_target(ProgressDrawTarget::hidden())
    }

    fn snapshot(handler: &CliProgressHandler) -> (u64, Option<u64>, String, bool) {
        let bar = handler.bar.lock().unwrap();
        (bar.position(), bar.length(), bar.message(), bar.is_finished())
    }

    #[test]
    fn phase_finish_marks_the_phase_name_done() {
        let handler = hidden();
        let callback = handler.get_callback();

        callback(Progress::PhaseStart {
            name: "Loading Reference",
        });
        assert_eq!(
            snapshot(&handler),
            (0, Some(0), "Loading Reference".to_string(), false)
        );

        callback(Progress::PhaseFinish);
        assert_eq!(snapshot(&handler).2, "✓ Loading Reference");
        assert!(snapshot(&handler).3);
    }

    #[test]
    fn shuffle_bar_counts_trials_and_completes_on_finish() {
        let handler = hidden();
        let callback = handler.get_callback();

        callback(Progress::ShuffleStart {
            side: Side::Y,
            trials: 1000,
        });
        for _ in 0..3 {
            callback(Progress::TrialComplete);
        }
        assert_eq!(
            snapshot(&handler),
            (3, Some(1000), "Shuffling Y".to_string(), false)
        );

        callback(Progress::ShuffleFinish {
            side: Side::Y,
            combinations: 41,
        });
        assert_eq!(
            snapshot(&handler),
            (1000, Some(1000), "✓ Shuffled Y: 41 combinations".to_string(), true)
        );
    }

    #[test]
    fn notes_do_not_disturb_the_current_bar() {
        let handler = hidden();
        let callback = handler.get_callback();

        callback(Progress::ShuffleStart {
            side: Side::X,
            trials: 10,
        });
        callback(Progress::TrialComplete);
        callback(Progress::Message("7 records for shuffled X".to_string()));

        assert_eq!(
            snapshot(&handler),
            (1, Some(10), "Shuffling X".to_string(), false)
        );
    }

    #[test]
    fn callback_can_be_driven_from_another_thread() {
        let handler = hidden();
        let callback = handler.get_callback();

        std::thread::spawn(move || {
            callback(Progress::ShuffleStart {
                side: Side::X,
                trials: 2,
            });
            callback(Progress::TrialComplete);
            callback(Progress::TrialComplete);
        })
        .join()
        .unwrap();

        assert_eq!(snapshot(&handler).0, 2);
    }
}
