use triaje_core::models::progress::{ProgressState, SectionProgress};
use triaje_core::observation::ObservationRecord;
use triaje_core::schema::ExamSchema;

fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        0
    } else {
        ((part as f64 / whole as f64) * 100.0).round() as u8
    }
}

/// Compute per-section and overall completion from the schema's field
/// totals.
///
/// A field counts as filled per [`FieldValue::is_filled`]. The overall
/// percentage follows the source policy: a section counts toward the
/// total as soon as any single field in it is filled. Coarse, and kept
/// that way deliberately; per-section percentages stay exact.
///
/// [`FieldValue::is_filled`]: triaje_core::observation::FieldValue::is_filled
pub fn compute_progress(schema: &ExamSchema, record: &ObservationRecord) -> ProgressState {
    let mut sections = Vec::with_capacity(schema.sections.len());
    let mut touched_sections = 0usize;

    for section in &schema.sections {
        let total = section.fields.len();
        let filled = section
            .fields
            .iter()
            .filter(|f| {
                record
                    .get(&section.id, &f.id)
                    .is_some_and(|v| v.is_filled())
            })
            .count();
        let touched = filled > 0;
        if touched {
            touched_sections += 1;
        }

        sections.push(SectionProgress {
            section_id: section.id.clone(),
            filled,
            total,
            percent: percent(filled, total),
            touched,
        });
    }

    ProgressState {
        overall_percent: percent(touched_sections, schema.sections.len()),
        sections,
    }
}
