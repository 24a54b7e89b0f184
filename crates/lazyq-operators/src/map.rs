//! Map operator: one projected value per upstream element.

use crate::stats::{OpStats, Tally};
use crate::traits::Operator;

const MAP: &str = "map";

/// Applies `selector` to each element as it is demanded.
#[derive(Clone)]
pub struct Map<I, F> {
    iter: I,
    selector: F,
    tally: Tally,
}

impl<I, F, R> Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
{
    pub fn new(iter: I, selector: F) -> Self {
        Self {
            iter,
            selector,
            tally: Tally::default(),
        }
    }
}

impl<I, F, R> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if self.tally.done {
            return None;
        }
        match self.tally.pull(&mut self.iter) {
            Some(item) => {
                let projected = (self.selector)(item);
                self.tally.emit(projected)
            }
            None => self.tally.finish(MAP),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tally.bound(self.iter.size_hint())
    }
}

impl<I, F> Operator for Map<I, F> {
    fn name(&self) -> &'static str {
        MAP
    }

    fn stats(&self) -> OpStats {
        self.tally.snapshot(MAP)
    }
}

pub fn map<S, F, R>(source: S, selector: F) -> Map<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> R,
{
    Map::new(source.into_iter(), selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_length_and_order() {
        let src = vec![1, 2, 3];
        let out: Vec<String> = map(src.clone(), |x| format!("#{x}")).collect();
        assert_eq!(out.len(), src.len());
        assert_eq!(out, vec!["#1", "#2", "#3"]);
    }

    #[test]
    fn test_map_selector_only_runs_on_demand() {
        let mut calls = 0;
        {
            let mut op = map(vec![1, 2, 3, 4], |x| {
                calls += 1;
                x * 10
            });
            assert_eq!(op.next(), Some(10));
            assert_eq!(op.next(), Some(20));
            assert_eq!(op.pulled(), 2);
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_map_size_hint_tracks_source() {
        let op = map(vec![1, 2, 3], |x| x + 1);
        assert_eq!(op.size_hint(), (3, Some(3)));
    }
}
