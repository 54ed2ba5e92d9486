//! Color palettes published alongside the design tokens.
//!
//! Each palette is a 16-step scale keyed `"1"` through `"16"`, lightest
//! first. A scale with a missing or extra step is rejected at parse time.

use crate::meta::TokenProperties;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const COLOR_SCALE_STEPS: usize = 16;

/// One palette: the value at every step of the scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<String, String>",
    into = "IndexMap<String, String>"
)]
pub struct ColorValue {
    steps: [String; COLOR_SCALE_STEPS],
}

impl ColorValue {
    /// Value at a 1-based step.
    pub fn step(&self, step: usize) -> Option<&str> {
        step.checked_sub(1)
            .and_then(|index| self.steps.get(index))
            .map(String::as_str)
    }

    /// `(step, value)` pairs, lightest first.
    pub fn steps(&self) -> impl Iterator<Item = (usize, &str)> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, value)| (index + 1, value.as_str()))
    }

    /// The scale as tokens named `<palette>-<step>`.
    pub fn tokens(&self, palette: &str) -> Vec<TokenProperties> {
        self.steps()
            .map(|(step, value)| TokenProperties {
                name: format!("{palette}-{step}"),
                value: value.to_string(),
                description: None,
            })
            .collect()
    }
}

impl TryFrom<IndexMap<String, String>> for ColorValue {
    type Error = String;

    fn try_from(mut raw: IndexMap<String, String>) -> Result<Self, Self::Error> {
        let mut steps = Vec::with_capacity(COLOR_SCALE_STEPS);
        for step in 1..=COLOR_SCALE_STEPS {
            let value = raw
                .shift_remove(step.to_string().as_str())
                .ok_or_else(|| format!("color scale is missing step {step}"))?;
            steps.push(value);
        }
        if let Some(extra) = raw.keys().next() {
            return Err(format!("color scale has unknown step `{extra}`"));
        }
        let steps = steps
            .try_into()
            .map_err(|_| "color scale has the wrong number of steps".to_string())?;
        Ok(Self { steps })
    }
}

impl From<ColorValue> for IndexMap<String, String> {
    fn from(color: ColorValue) -> Self {
        color
            .steps
            .into_iter()
            .enumerate()
            .map(|(index, value)| ((index + 1).to_string(), value))
            .collect()
    }
}

/// Palette name to scale, in file order.
pub type ColorsJson = IndexMap<String, ColorValue>;
