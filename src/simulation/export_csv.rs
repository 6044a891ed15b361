//! Per-unit damage statistics as CSV, one row per unit, highest damage first.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::simulation::response::{SimulationResponse, UnitResult};

#[derive(Debug, Serialize)]
struct DamageRow<'a> {
    rank: usize,
    champion_api_name: &'a str,
    entity_id: u64,
    total_damage: f64,
    dps: f64,
    ad_damage: f64,
    ap_damage: f64,
    true_damage: f64,
    auto_attacks: u32,
    spell_casts: u32,
    auto_attack_damage: f64,
    spell_damage: f64,
    damage_share: f64,
}

fn row(rank: usize, result: &UnitResult, team_total: f64) -> DamageRow<'_> {
    let stats = &result.damage_stats;
    let damage_share = if team_total > 0.0 {
        stats.total_damage / team_total
    } else {
        0.0
    };
    DamageRow {
        rank,
        champion_api_name: &result.champion_api_name,
        entity_id: result.champion_entity_id,
        total_damage: stats.total_damage,
        dps: stats.damage_per_second,
        ad_damage: stats.total_ad_damage,
        ap_damage: stats.total_ap_damage,
        true_damage: stats.total_true_damage,
        auto_attacks: stats.total_auto_attack_counts,
        spell_casts: stats.total_spell_cast_counts,
        auto_attack_damage: stats.auto_attack_damage,
        spell_damage: stats.spell_damage,
        damage_share,
    }
}

pub fn write_damage_csv<W: Write>(response: &SimulationResponse, writer: W) -> Result<(), csv::Error> {
    let team_total = response.total_damage();
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (index, result) in response.damage_ranking().into_iter().enumerate() {
        csv_writer.serialize(row(index + 1, result, team_total))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_damage_csv(
    response: &SimulationResponse,
    path: impl AsRef<Path>,
) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_damage_csv(response, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::response::DamageStats;

    fn result(api_name: &str, total_damage: f64) -> UnitResult {
        UnitResult {
            champion_api_name: api_name.to_string(),
            champion_entity_id: 0,
            damage_stats: DamageStats {
                total_damage,
                ..DamageStats::default()
            },
        }
    }

    #[test]
    fn rows_are_ranked_with_header() {
        let response = SimulationResponse {
            results: vec![result("TFT14_Zac", 100.0), result("TFT14_Jinx", 300.0)],
            events: Vec::new(),
        };
        let mut out = Vec::new();
        write_damage_csv(&response, &mut out).expect("csv should write");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("rank,champion_api_name,entity_id,total_damage"));
        assert!(lines[1].starts_with("1,TFT14_Jinx,0,300"));
        assert!(lines[1].ends_with(",0.75"));
        assert!(lines[2].starts_with("2,TFT14_Zac,0,100"));
    }
}
