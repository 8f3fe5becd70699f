use std::fmt;

use todo_core::TodoMirror;

const BAR_WIDTH: usize = 20;

/// Plain-text view of the mirror: heading, progress, one line per todo.
pub struct View<'a>(pub &'a TodoMirror);

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mirror = self.0;
        let percent = mirror.completion_percentage();
        let filled = (percent / 100.0 * BAR_WIDTH as f64).round() as usize;

        writeln!(f, "Today's Tasks")?;
        writeln!(
            f,
            "{} of {} completed",
            mirror.completed_count(),
            mirror.len()
        )?;
        writeln!(
            f,
            "[{}{}] {percent:.0}%",
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled)
        )?;
        for todo in mirror.todos() {
            let mark = if todo.completed { '✔' } else { '◻' };
            writeln!(f, "{mark} {}  {}", todo.id, todo.title)?;
        }
        Ok(())
    }
}

pub fn render(mirror: &TodoMirror) -> String {
    View(mirror).to_string()
}
