//! Print materials and their rates.

use serde::{Deserialize, Serialize};

/// Materials offered for custom prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Material {
    #[default]
    Pla,
    Abs,
    Petg,
    Tpu,
    Nylon,
    WoodFill,
    CarbonFiber,
    Resin,
}

impl Material {
    /// All offered materials, in catalog order.
    pub const ALL: [Material; 8] = [
        Material::Pla,
        Material::Abs,
        Material::Petg,
        Material::Tpu,
        Material::Nylon,
        Material::WoodFill,
        Material::CarbonFiber,
        Material::Resin,
    ];

    /// Rate in rupees per gram.
    pub fn price_per_gram(&self) -> f64 {
        match self {
            Material::Pla => 2.5,
            Material::Abs => 3.0,
            Material::Petg => 3.5,
            Material::Tpu => 5.0,
            Material::Nylon => 6.0,
            Material::WoodFill => 4.5,
            Material::CarbonFiber => 8.0,
            Material::Resin => 7.0,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Material::Pla => "PLA",
            Material::Abs => "ABS",
            Material::Petg => "PETG",
            Material::Tpu => "TPU",
            Material::Nylon => "Nylon",
            Material::WoodFill => "Wood Fill",
            Material::CarbonFiber => "Carbon Fiber",
            Material::Resin => "Resin",
        }
    }

    /// Short guidance shown next to the material picker.
    pub fn info(&self) -> &'static str {
        match self {
            Material::Pla => {
                "Best for beginners. Easy to print, biodegradable, good surface finish."
            }
            Material::Abs => {
                "Strong and durable. Good for functional parts. Requires heated bed."
            }
            Material::Petg => "Chemical resistant, flexible. Great for outdoor use.",
            Material::Tpu => "Flexible rubber-like material. Perfect for phone cases, seals.",
            Material::Nylon => "Very strong and durable. Great for mechanical parts.",
            Material::WoodFill => "PLA mixed with wood fibers. Natural wood-like finish.",
            Material::CarbonFiber => "Extremely strong and lightweight. Premium material.",
            Material::Resin => "Ultra-high detail. Perfect for miniatures and jewelry.",
        }
    }

    /// Cost of printing `weight_g` grams in this material, in rupees.
    pub fn cost_for_weight(&self, weight_g: f64) -> f64 {
        weight_g * self.price_per_gram()
    }
}
