use crate::*;
use dialoguer::Select;

/// Terminal prompt for a human seat.
#[derive(Debug, Clone, Copy, Default)]
pub struct Human;

impl Human {
    /// Asks `seat` for a step among the ones legal at `cell`.
    /// Returns `None` if the player quits.
    pub fn choose(&self, track: &Track, seat: Seat, cell: Cell) -> anyhow::Result<Option<usize>> {
        let steps = track
            .enabled(cell)
            .map(|slot| track.step(slot))
            .collect::<Vec<usize>>();
        let mut choices = steps
            .iter()
            .map(|step| format!("step {}", step))
            .collect::<Vec<String>>();
        choices.push(String::from("quit"));
        let selection = Select::new()
            .with_prompt(format!("\n{} AT CELL {} OF {}", seat, cell, track.goal()))
            .report(false)
            .items(choices.as_slice())
            .default(0)
            .interact_opt()?;
        Ok(selection.and_then(|i| steps.get(i).copied()))
    }
}
