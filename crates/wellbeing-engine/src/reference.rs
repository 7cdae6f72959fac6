use wellbeing_core::models::record::DailyRecord;

use crate::score::daily_score;
use crate::series::ScoreSeries;

/// Reference baseline R: the worst score in scope, 0 when there is no
/// history at all.
pub fn reference_baseline(series: &ScoreSeries) -> u32 {
    series.max_score().unwrap_or(0)
}

/// Same as [`reference_baseline`], straight from records.
pub fn reference_from_records<'a>(records: impl IntoIterator<Item = &'a DailyRecord>) -> u32 {
    records
        .into_iter()
        .map(|r| daily_score(Some(r)))
        .max()
        .unwrap_or(0)
}
