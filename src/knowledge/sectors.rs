use std::collections::HashMap;

use crate::core::Sector;

/// Funding and staffing benchmarks for successful projects in a sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorBenchmark {
    pub minimum_budget: f64,
    pub average_budget: f64,
    pub optimal_budget: f64,
    pub average_team_size: f64,
    pub average_timeline_months: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct SectorProfile {
    benchmark: SectorBenchmark,
    tam_millions: f64,
    valuation_multiplier: Option<f64>,
}

/// Read-only sector lookups. Unknown sectors fall back to the fintech
/// benchmarks, a 10,000M TAM and a neutral valuation multiplier.
#[derive(Debug, Clone)]
pub struct SectorTable {
    profiles: HashMap<Sector, SectorProfile>,
    fallback_benchmark: SectorBenchmark,
    default_tam_millions: f64,
}

const fn benchmark(min: f64, avg: f64, optimal: f64, team: f64, months: f64) -> SectorBenchmark {
    SectorBenchmark {
        minimum_budget: min,
        average_budget: avg,
        optimal_budget: optimal,
        average_team_size: team,
        average_timeline_months: months,
    }
}

impl SectorTable {
    pub fn standard() -> Self {
        let rows = [
            (Sector::Fintech, benchmark(300_000.0, 800_000.0, 1_500_000.0, 6.0, 12.0), 15_000.0, Some(1.3)),
            (Sector::DigitalHealth, benchmark(400_000.0, 1_000_000.0, 2_000_000.0, 8.0, 14.0), 20_000.0, Some(1.2)),
            (Sector::SmartAgriculture, benchmark(500_000.0, 1_200_000.0, 2_500_000.0, 10.0, 18.0), 25_000.0, None),
            (Sector::RenewableEnergy, benchmark(800_000.0, 2_000_000.0, 5_000_000.0, 12.0, 24.0), 100_000.0, Some(1.4)),
            (Sector::Ecommerce, benchmark(200_000.0, 500_000.0, 1_000_000.0, 5.0, 8.0), 50_000.0, Some(1.0)),
            (Sector::Edtech, benchmark(250_000.0, 600_000.0, 1_200_000.0, 6.0, 10.0), 8_000.0, Some(1.1)),
            (Sector::Proptech, benchmark(400_000.0, 900_000.0, 1_800_000.0, 7.0, 12.0), 30_000.0, None),
            (Sector::Logistics, benchmark(350_000.0, 800_000.0, 1_500_000.0, 8.0, 14.0), 40_000.0, None),
            (Sector::FoodDelivery, benchmark(300_000.0, 700_000.0, 1_400_000.0, 6.0, 10.0), 10_000.0, None),
            (Sector::Tourism, benchmark(250_000.0, 600_000.0, 1_200_000.0, 5.0, 12.0), 35_000.0, None),
        ];

        let profiles = rows
            .into_iter()
            .map(|(sector, benchmark, tam_millions, valuation_multiplier)| {
                (
                    sector,
                    SectorProfile {
                        benchmark,
                        tam_millions,
                        valuation_multiplier,
                    },
                )
            })
            .collect();

        Self {
            profiles,
            fallback_benchmark: benchmark(300_000.0, 800_000.0, 1_500_000.0, 6.0, 12.0),
            default_tam_millions: 10_000.0,
        }
    }

    pub fn benchmark(&self, sector: &Sector) -> SectorBenchmark {
        self.profiles
            .get(sector)
            .map(|p| p.benchmark)
            .unwrap_or(self.fallback_benchmark)
    }

    /// Total addressable market, in millions.
    pub fn tam_millions(&self, sector: &Sector) -> f64 {
        self.profiles
            .get(sector)
            .map(|p| p.tam_millions)
            .unwrap_or(self.default_tam_millions)
    }

    pub fn valuation_multiplier(&self, sector: &Sector) -> f64 {
        self.profiles
            .get(sector)
            .and_then(|p| p.valuation_multiplier)
            .unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sector_uses_fintech_benchmarks() {
        let table = SectorTable::standard();
        let other = Sector::Other("spacetech".into());
        assert_eq!(table.benchmark(&other), table.benchmark(&Sector::Fintech));
        assert_eq!(table.tam_millions(&other), 10_000.0);
        assert_eq!(table.valuation_multiplier(&other), 1.0);
    }

    #[test]
    fn multipliers_default_to_neutral() {
        let table = SectorTable::standard();
        assert_eq!(table.valuation_multiplier(&Sector::RenewableEnergy), 1.4);
        assert_eq!(table.valuation_multiplier(&Sector::Tourism), 1.0);
    }
}
