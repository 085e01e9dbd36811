//! Rendering for each screen.

use lipgloss_extras::lipgloss;

use super::menu::{CompletionOption, LandingOption};
use super::{style, App, Screen};

const MENU_INSTRUCTIONS: &str = "Use ↑/↓ or j/k to navigate, Enter to select, q to quit";
const INPUT_PROMPT: &str = "Enter timer duration (e.g., 5m, 30s, 1h30m):";
const INPUT_INSTRUCTIONS: &str = "Press Enter to start timer, q to quit";

impl App {
    /// Renders the active screen, centered in the last known window size.
    pub fn render(&self) -> String {
        let content = match self.screen {
            Screen::Landing => self.landing_view(),
            Screen::DurationInput => self.input_view(),
            Screen::Running => self.running_view(),
            Screen::Completed => self.completed_view(),
        };

        lipgloss::place(
            self.width.into(),
            self.height.into(),
            lipgloss::CENTER,
            lipgloss::CENTER,
            &content,
            &[],
        )
    }

    fn landing_view(&self) -> String {
        let banner = style::banner().render(style::HOURGLASS_ASCII);
        let labels: Vec<&str> = LandingOption::ALL.iter().map(|o| o.label()).collect();
        let menu = menu_view(&labels, self.landing.cursor());
        let instructions = style::instructions().render(MENU_INSTRUCTIONS);

        lipgloss::join_vertical(
            lipgloss::CENTER,
            &[&banner, "\n", &menu, "", &instructions],
        )
    }

    fn input_view(&self) -> String {
        let mut out = String::new();
        out.push_str(INPUT_PROMPT);
        out.push_str("\n\n");
        if let Some(input) = &self.input {
            out.push_str(&input.view());
        }
        out.push('\n');

        if let Some(err) = &self.error {
            out.push('\n');
            out.push_str(&style::error().render(&format!("Error: {err}")));
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&style::instructions().render(INPUT_INSTRUCTIONS));
        out
    }

    fn running_view(&self) -> String {
        let remaining = if self.timer.timedout() {
            "All done!!".to_string()
        } else {
            self.timer.view()
        };

        let mut out = style::timer().render(&format!("Timer: {remaining}"));
        out.push('\n');
        if !self.quitting {
            out.push('\n');
            out.push_str(&self.help.view(&self.keymap));
        }
        out
    }

    fn completed_view(&self) -> String {
        let title = style::complete().render("🎉 Timer Complete! 🎉");
        let labels: Vec<String> = CompletionOption::ALL
            .iter()
            .map(|option| match option {
                CompletionOption::Restart => {
                    format!("Restart Timer for: {}", self.last_duration_text)
                }
                CompletionOption::ReturnToMenu => "Return to Menu".to_string(),
            })
            .collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        let menu = menu_view(&labels, self.completion.cursor());
        let instructions = style::instructions().render(MENU_INSTRUCTIONS);

        lipgloss::join_vertical(
            lipgloss::CENTER,
            &[&title, "\n", &menu, "", &instructions],
        )
    }
}

fn menu_view(labels: &[&str], selected: usize) -> String {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            if i == selected {
                style::selected_menu_item().render(&format!("> {label}"))
            } else {
                style::menu_item().render(&format!("  {label}"))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
