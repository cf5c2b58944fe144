/// IMC = peso (kg) / altura (m)².
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// WHO classification bands for an IMC value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiClassification {
    Magreza,
    Normal,
    Sobrepeso,
    ObesidadeGrau1,
    ObesidadeGrau2,
    ObesidadeGrau3,
}

impl BmiClassification {
    /// Bands are contiguous half-open intervals, so every finite value maps
    /// to exactly one classification.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Magreza
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Sobrepeso
        } else if bmi < 35.0 {
            Self::ObesidadeGrau1
        } else if bmi < 40.0 {
            Self::ObesidadeGrau2
        } else {
            Self::ObesidadeGrau3
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Magreza => "Magreza",
            Self::Normal => "Normal (Peso Saudável)",
            Self::Sobrepeso => "Sobrepeso",
            Self::ObesidadeGrau1 => "Obesidade Grau I",
            Self::ObesidadeGrau2 => "Obesidade Grau II (Severa)",
            Self::ObesidadeGrau3 => "Obesidade Grau III (Mórbida)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_arithmetic() {
        assert!((compute_bmi(70.0, 1.75) - 22.857142857142858).abs() < 1e-9);
        assert!((compute_bmi(120.0, 1.60) - 46.875).abs() < 1e-9);
        assert!((compute_bmi(81.0, 1.80) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(
            BmiClassification::from_bmi(18.49999),
            BmiClassification::Magreza
        );
        assert_eq!(BmiClassification::from_bmi(18.5), BmiClassification::Normal);
        assert_eq!(BmiClassification::from_bmi(24.9), BmiClassification::Normal);
        assert_eq!(
            BmiClassification::from_bmi(25.0),
            BmiClassification::Sobrepeso
        );
        assert_eq!(
            BmiClassification::from_bmi(29.95),
            BmiClassification::Sobrepeso
        );
        assert_eq!(
            BmiClassification::from_bmi(30.0),
            BmiClassification::ObesidadeGrau1
        );
        assert_eq!(
            BmiClassification::from_bmi(34.95),
            BmiClassification::ObesidadeGrau1
        );
        assert_eq!(
            BmiClassification::from_bmi(35.0),
            BmiClassification::ObesidadeGrau2
        );
        assert_eq!(
            BmiClassification::from_bmi(39.99),
            BmiClassification::ObesidadeGrau2
        );
        assert_eq!(
            BmiClassification::from_bmi(40.0),
            BmiClassification::ObesidadeGrau3
        );
    }

    #[test]
    fn test_end_to_end_values() {
        let bmi = compute_bmi(70.0, 1.75);
        assert_eq!(
            BmiClassification::from_bmi(bmi).label(),
            "Normal (Peso Saudável)"
        );

        let bmi = compute_bmi(120.0, 1.60);
        assert_eq!(
            BmiClassification::from_bmi(bmi).label(),
            "Obesidade Grau III (Mórbida)"
        );
    }

    #[test]
    fn test_oversized_inputs_overflow_to_infinity() {
        let bmi = compute_bmi(f64::MAX, 0.5);
        assert!(bmi.is_infinite());
        // Non-finite values still land in a band rather than panicking.
        assert_eq!(
            BmiClassification::from_bmi(bmi),
            BmiClassification::ObesidadeGrau3
        );
    }
}
