/// Index of the largest value, or `None` for an empty slice.
///
/// Ties resolve to the lowest index. `NaN` entries never win unless every entry
/// is `NaN`, in which case index `0` is returned.
pub fn argmax(values: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (index, &value) in values.iter().enumerate() {
        match best {
            None => best = Some((index, value)),
            Some((_, best_value)) if best_value.is_nan() && !value.is_nan() => {
                best = Some((index, value))
            }
            Some((_, best_value)) if value > best_value => best = Some((index, value)),
            _ => {}
        }
    }

    best.map(|(index, _)| index)
}
