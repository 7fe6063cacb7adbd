use std::time::Duration;

/// An item paired with the delay before its entrance starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Staggered<T> {
    pub index: usize,
    pub item: T,
    pub delay: Duration,
}

/// Assigns `index * step` as the delay of each item, in source order.
pub fn sequence<I>(items: I, step: Duration) -> Vec<Staggered<I::Item>>
where
    I: IntoIterator,
{
    sequence_after(items, Duration::ZERO, step)
}

/// Like [`sequence`] but every delay is shifted by `base`, for cascades
/// nested inside an already delayed parent.
pub fn sequence_after<I>(items: I, base: Duration, step: Duration) -> Vec<Staggered<I::Item>>
where
    I: IntoIterator,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Staggered {
            index,
            item,
            delay: base + step * index as u32,
        })
        .collect()
}

/// Splits text into words for word-by-word reveals. Runs of whitespace act
/// as a single separator and no empty words are produced.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const STEP: Duration = Duration::from_millis(100);

    fn delays<T>(staggered: &[Staggered<T>]) -> Vec<Duration> {
        staggered.iter().map(|s| s.delay).collect()
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(sequence(Vec::<&str>::new(), STEP).is_empty());
    }

    #[test]
    fn single_item_starts_immediately() {
        let out = sequence(["x"], STEP);
        assert_eq!(
            out,
            vec![Staggered {
                index: 0,
                item: "x",
                delay: Duration::ZERO
            }]
        );
    }

    #[test]
    fn delays_grow_by_one_step_per_item() {
        let out = sequence(["x", "y", "z"], STEP);
        let items: Vec<_> = out.iter().map(|s| s.item).collect();
        assert_eq!(items, ["x", "y", "z"]);
        assert_eq!(delays(&out), [Duration::ZERO, STEP, STEP * 2]);
    }

    #[test]
    fn sequencing_is_deterministic() {
        let items = ["Starter", "Premium", "Lifetime"];
        assert_eq!(sequence(items, STEP), sequence(items, STEP));
    }

    #[test]
    fn nested_cascade_is_offset_by_parent_delay() {
        let parent = Duration::from_millis(200);
        let out = sequence_after(["a", "b", "c"], parent, Duration::from_millis(50));
        assert_eq!(
            delays(&out),
            [
                Duration::from_millis(200),
                Duration::from_millis(250),
                Duration::from_millis(300)
            ]
        );
    }

    #[rstest]
    #[case("Find  Your   Inner Peace", &["Find", "Your", "Inner", "Peace"])]
    #[case("  leading and trailing  ", &["leading", "and", "trailing"])]
    #[case("tabs\tand\nnewlines", &["tabs", "and", "newlines"])]
    #[case("", &[])]
    #[case("   ", &[])]
    fn splits_on_whitespace_runs(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(split_words(text), expected);
    }
}
