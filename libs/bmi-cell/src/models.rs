use serde::{Deserialize, Serialize};

// Input bounds exposed by the form widgets.
pub const MIN_WEIGHT_KG: f64 = 1.0;
pub const MAX_WEIGHT_KG: f64 = 300.0;
pub const MIN_HEIGHT_M: f64 = 0.50;
pub const MAX_HEIGHT_M: f64 = 3.00;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiRequest {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl BmiRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !self.weight_kg.is_finite()
            || self.weight_kg < MIN_WEIGHT_KG
            || self.weight_kg > MAX_WEIGHT_KG
        {
            return Err(format!(
                "Peso inválido. Informe um valor entre {:.1} e {:.1} kg.",
                MIN_WEIGHT_KG, MAX_WEIGHT_KG
            ));
        }

        if !self.height_m.is_finite()
            || self.height_m < MIN_HEIGHT_M
            || self.height_m > MAX_HEIGHT_M
        {
            return Err(format!(
                "Altura inválida. Informe um valor entre {:.2} e {:.2} m.",
                MIN_HEIGHT_M, MAX_HEIGHT_M
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub classification: String,
    pub tip: String,
    pub sources: Vec<Citation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub title: String,
    pub uri: String,
}
