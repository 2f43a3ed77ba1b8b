//! Centre map and wayfinding screen

use serde::{Deserialize, Serialize};

use crate::components::Chip;

/// One leg of a walking route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Instruction text
    pub instruction: String,
    /// Leg duration label, e.g. "2 min"
    pub duration: String,
}

impl RouteStep {
    fn new(instruction: &str, duration: &str) -> Self {
        Self { instruction: instruction.to_string(), duration: duration.to_string() }
    }
}

/// Map screen with step-by-step wayfinding
#[derive(Debug, Clone)]
pub struct MapScreen {
    steps: Vec<RouteStep>,
    current: usize,
}

impl MapScreen {
    /// Create the screen with the sample route
    pub fn new() -> Self {
        Self {
            steps: vec![
                RouteStep::new("Head towards the central atrium", "2 min"),
                RouteStep::new("Take the escalator to Level 2", "1 min"),
                RouteStep::new("Turn left past the food court", "2 min"),
                RouteStep::new("Apple Store is on your right", "1 min"),
            ],
            current: 0,
        }
    }

    /// All steps in walking order
    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    /// The step the visitor is on
    pub fn current_step(&self) -> &RouteStep {
        &self.steps[self.current]
    }

    /// Advance to the next step; false at the end of the route
    pub fn next_step(&mut self) -> bool {
        if self.current + 1 < self.steps.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Step back; false at the start of the route
    pub fn previous_step(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Progress through the route, 0.0 to 1.0
    pub fn progress(&self) -> f32 {
        (self.current + 1) as f32 / self.steps.len() as f32
    }

    /// Step chips rendered under the map
    pub fn step_chips(&self) -> Vec<Chip> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                Chip::new(format!("{}. {}", i + 1, step.instruction))
                    .selected(i == self.current)
                    .compact(true)
            })
            .collect()
    }
}

impl Default for MapScreen {
    fn default() -> Self {
        Self::new()
    }
}
