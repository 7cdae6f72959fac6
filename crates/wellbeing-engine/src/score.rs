use wellbeing_core::models::record::DailyRecord;
use wellbeing_core::symptoms::SYMPTOMS;

/// Daily score: the sum of every canonical symptom's intensity.
///
/// No record means no symptoms reported, so 0. Unknown ids are not counted
/// and intensities are clamped, which keeps the result within
/// `0..=MAX_SCORE`.
pub fn daily_score(record: Option<&DailyRecord>) -> u32 {
    let Some(record) = record else {
        return 0;
    };

    SYMPTOMS
        .iter()
        .filter_map(|symptom| record.intensity_of(symptom.key))
        .map(u32::from)
        .sum()
}
