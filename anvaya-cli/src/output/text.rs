//! Text output formatting with colors.

use anvaya_core::{
    Activity, ActivityStatistics, ApiInfo, HealthStatus, Photo, Wing, WingWithRelations,
};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

// Bar characters for the statistics table
const BAR_FULL: char = '█';
const BAR_EMPTY: char = '░';

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
    bar_width: usize,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self {
            use_colors,
            bar_width: 20,
        }
    }

    // ========================================================================
    // Wings
    // ========================================================================

    /// Formats the wing list.
    pub fn format_wings(&self, wings: &[Wing]) -> String {
        if wings.is_empty() {
            return self.dim("No wings found");
        }

        let mut lines = vec![self.bold(&format!("{:<18} {}", "SLUG", "NAME"))];
        for wing in wings {
            lines.push(format!("{:<18} {}", self.cyan(&wing.slug), wing.name));
            if let Some(description) = wing.description.as_deref().filter(|d| !d.is_empty()) {
                lines.push(format!("{:<18} {}", "", self.dim(description)));
            }
        }
        lines.join("\n")
    }

    /// Formats one wing with its activities and photos.
    pub fn format_wing(&self, wing: &WingWithRelations) -> String {
        let mut lines = vec![format!(
            "{} ({})",
            self.bold(&wing.wing.name),
            self.cyan(wing.slug())
        )];
        if let Some(description) = &wing.wing.description {
            lines.push(description.clone());
        }

        lines.push(String::new());
        lines.push(self.bold(&format!("Activities ({})", wing.activities.len())));
        for activity in &wing.activities {
            lines.push(format!("  {}", self.format_activity_line(activity)));
        }

        lines.push(String::new());
        lines.push(self.bold(&format!("Photos ({})", wing.photos.len())));
        for photo in &wing.photos {
            lines.push(format!("  {}", self.format_photo_line(photo)));
        }

        lines.join("\n")
    }

    // ========================================================================
    // Activities & Photos
    // ========================================================================

    /// Formats a list of activities, one per line.
    pub fn format_activities(&self, activities: &[Activity]) -> String {
        if activities.is_empty() {
            return self.dim("No activities found");
        }
        activities
            .iter()
            .map(|a| self.format_activity_line(a))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Formats one activity as a single line.
    pub fn format_activity_line(&self, activity: &Activity) -> String {
        let mut line = format!(
            "{}  #{:<5} {}",
            activity.activity_date,
            activity.id,
            activity.title
        );
        if let Some(coordinator) = &activity.faculty_coordinator {
            line.push_str(&format!("  {}", self.dim(coordinator)));
        }
        if activity.has_report() {
            line.push_str(&format!("  {}", self.dim("[report]")));
        }
        line
    }

    /// Formats one activity in full.
    pub fn format_activity(&self, activity: &Activity) -> String {
        let mut lines = vec![
            format!("{} {}", self.bold(&activity.title), self.dim(&format!("#{}", activity.id))),
            format!("Date:        {}", activity.activity_date),
            format!("Wing:        {}", activity.wing_id),
        ];
        if let Some(coordinator) = &activity.faculty_coordinator {
            lines.push(format!("Coordinator: {coordinator}"));
        }
        if let Some(report) = activity.report_url.as_deref().filter(|_| activity.has_report()) {
            lines.push(format!("Report:      {}", self.cyan(report)));
        }
        lines.push(String::new());
        lines.push(activity.description.clone());
        lines.join("\n")
    }

    /// Formats a list of photos.
    pub fn format_photos(&self, photos: &[Photo]) -> String {
        if photos.is_empty() {
            return self.dim("No photos found");
        }
        photos
            .iter()
            .map(|p| self.format_photo_line(p))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_photo_line(&self, photo: &Photo) -> String {
        format!("#{:<5} {}", photo.id, self.cyan(&photo.url))
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Formats activity statistics as a bar table.
    pub fn format_statistics(&self, stats: &ActivityStatistics) -> String {
        let scope = match stats.filtered_year {
            Some(year) => year.to_string(),
            None => "all time".to_string(),
        };
        let mut lines = vec![self.bold(&format!("Activity statistics ({scope})"))];
        lines.push("─".repeat(50));

        let max = stats
            .statistics
            .iter()
            .map(|s| s.activity_count)
            .max()
            .unwrap_or(0);

        if stats.statistics.is_empty() {
            lines.push(self.dim("No activities recorded"));
        }
        for row in &stats.statistics {
            lines.push(format!(
                "{:<20} {} {}",
                row.wing_name,
                self.bar(row.activity_count, max),
                row.activity_count
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {}", stats.total_activities()));
        if !stats.available_years.is_empty() {
            let years: Vec<String> = stats.available_years.iter().map(ToString::to_string).collect();
            lines.push(format!("Years: {}", self.dim(&years.join(", "))));
        }
        lines.join("\n")
    }

    /// Formats a bar of `value` relative to `max`.
    pub fn bar(&self, value: u64, max: u64) -> String {
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filled = if max == 0 {
            0
        } else {
            ((value as f64 / max as f64) * self.bar_width as f64).round() as usize
        };
        let filled = filled.min(self.bar_width);
        let empty = self.bar_width - filled;

        let bar = format!(
            "{}{}",
            BAR_FULL.to_string().repeat(filled),
            BAR_EMPTY.to_string().repeat(empty)
        );
        self.green(&bar)
    }

    // ========================================================================
    // Session & Health
    // ========================================================================

    /// Formats backend health.
    pub fn format_health(&self, base_url: &str, health: &HealthStatus, info: Option<&ApiInfo>) -> String {
        let status = if health.is_healthy() {
            self.green(&format!("✓ {}", health.status))
        } else {
            self.red(&format!("✗ {}", health.status))
        };
        let mut lines = vec![format!("{:<9}{}", "API:", self.cyan(base_url)), format!("{:<9}{status}", "Health:")];
        if let Some(info) = info {
            lines.push(format!("{:<9}{} {}", "Service:", info.message, self.dim(&format!("v{}", info.version))));
        }
        lines.join("\n")
    }

    /// Formats the current session state.
    pub fn format_session(&self, base_url: &str, authenticated: bool, storage: &str) -> String {
        let state = if authenticated {
            self.green("logged in")
        } else {
            self.dim("not logged in")
        };
        [
            format!("{:<9}{}", "API:", self.cyan(base_url)),
            format!("{:<9}{state}", "Session:"),
            format!("{:<9}{storage}", "Storage:"),
        ]
        .join("\n")
    }

    /// Formats a success line.
    pub fn format_success(&self, message: &str) -> String {
        format!("{} {message}", self.green("✓"))
    }

    /// Formats an error message.
    pub fn format_error(&self, error: &str) -> String {
        format!("{}: {}", self.red("Error"), error)
    }

    // ========================================================================
    // Color/style helpers
    // ========================================================================

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }
}
