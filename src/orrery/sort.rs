//! # Toggle Sorting
//!
//! [`SortEngine`] reorders a collection by one [`Field`] with a
//! distribution (bucket) sort, and remembers per field which direction the
//! next sort will use. Each call flips that field's flag, so choosing the
//! same column repeatedly alternates ascending and descending. Flags for
//! different fields are independent and start ascending.
//!
//! ## Numeric fields
//!
//! `n` records are spread over `n` buckets by where their value falls in
//! `[min, max]`. Each bucket is insertion-sorted with a comparison that
//! already points in the requested direction, and buckets are concatenated
//! in index order (ascending) or reverse index order (descending). When all
//! values are equal the range is taken as `1` and everything lands in the
//! first bucket.
//!
//! ## Name
//!
//! Names use 26 letter buckets keyed on the case-folded first character,
//! clamped to `a..=z`, and are compared case-insensitively on the full
//! string. The name sort follows the toggle exactly like numeric fields.
//!
//! Insertion sort keeps records with equal keys in their pre-sort order in
//! both directions.

use crate::error::Result;
use crate::model::{CelestialBody, Direction, Field};

const LETTER_BUCKETS: usize = 26;

/// Per-field "next sort is descending" flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    descending: [bool; 4],
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(field: Field) -> usize {
        match field {
            Field::Name => 0,
            Field::Distance => 1,
            Field::Mass => 2,
            Field::OrbitalPeriod => 3,
        }
    }

    /// Whether the next sort by `field` will be descending.
    pub fn is_descending(&self, field: Field) -> bool {
        self.descending[Self::slot(field)]
    }

    pub fn set(&mut self, field: Field, descending: bool) {
        self.descending[Self::slot(field)] = descending;
    }

    /// Returns the direction to use now and flips the flag for next time.
    pub fn toggle(&mut self, field: Field) -> Direction {
        let slot = Self::slot(field);
        let current = self.descending[slot];
        self.descending[slot] = !current;
        Direction::from_descending(current)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SortEngine {
    state: SortState,
}

impl SortEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SortState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SortState {
        &mut self.state
    }

    /// Sorts `bodies` by `field` in the direction held by the toggle, then
    /// flips the toggle. Returns the direction applied.
    pub fn sort_by(&mut self, bodies: &mut Vec<CelestialBody>, field: Field) -> Direction {
        let direction = self.state.toggle(field);
        sort_in_direction(bodies, field, direction);
        direction
    }

    /// Same as [`SortEngine::sort_by`] but takes the field key as text. An
    /// unknown key fails before the collection or the toggle is touched.
    pub fn sort_by_key(&mut self, bodies: &mut Vec<CelestialBody>, key: &str) -> Result<Direction> {
        let field: Field = key.parse()?;
        Ok(self.sort_by(bodies, field))
    }
}

/// Sorts `bodies` by `field` in a fixed direction, ignoring any toggle state.
pub fn sort_in_direction(bodies: &mut Vec<CelestialBody>, field: Field, direction: Direction) {
    if bodies.len() < 2 {
        return;
    }
    let value_of: fn(&CelestialBody) -> f64 = match field {
        Field::Name => return sort_names(bodies, direction),
        Field::Distance => |b| b.distance,
        Field::Mass => |b| b.mass,
        Field::OrbitalPeriod => |b| b.orbital_period,
    };
    sort_numeric(bodies, value_of, direction);
}

fn sort_numeric(
    bodies: &mut Vec<CelestialBody>,
    value_of: fn(&CelestialBody) -> f64,
    direction: Direction,
) {
    let n = bodies.len();
    let (min, max) = bodies
        .iter()
        .map(value_of)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let range = if max == min { 1.0 } else { max - min };

    bucket_sort(
        bodies,
        n,
        value_of,
        |value: &f64| ((value - min) / range * n as f64).floor() as usize,
        direction,
    );
}

fn sort_names(bodies: &mut Vec<CelestialBody>, direction: Direction) {
    bucket_sort(
        bodies,
        LETTER_BUCKETS,
        |b| b.name.to_lowercase(),
        |folded: &String| letter_bucket(folded),
        direction,
    );
}

fn letter_bucket(folded: &str) -> usize {
    match folded.chars().next() {
        Some(c) if c < 'a' => 0,
        Some(c) if c > 'z' => LETTER_BUCKETS - 1,
        Some(c) => (c as u32 - 'a' as u32) as usize,
        None => 0,
    }
}

/// Distributes `bodies` into `bucket_count` buckets, insertion-sorts each
/// bucket by key, and writes the concatenation back. Bucket indices past the
/// end are clamped to the last bucket.
fn bucket_sort<K, KeyFn, BucketFn>(
    bodies: &mut Vec<CelestialBody>,
    bucket_count: usize,
    key_of: KeyFn,
    bucket_of: BucketFn,
    direction: Direction,
) where
    K: PartialOrd,
    KeyFn: Fn(&CelestialBody) -> K,
    BucketFn: Fn(&K) -> usize,
{
    let mut buckets: Vec<Vec<(K, CelestialBody)>> = (0..bucket_count).map(|_| Vec::new()).collect();

    for body in bodies.drain(..) {
        let key = key_of(&body);
        let slot = bucket_of(&key).min(bucket_count - 1);
        buckets[slot].push((key, body));
    }

    for bucket in &mut buckets {
        insertion_sort(bucket, direction);
    }

    if direction.is_descending() {
        buckets.reverse();
    }
    bodies.extend(buckets.into_iter().flatten().map(|(_, body)| body));
}

fn insertion_sort<K: PartialOrd>(bucket: &mut [(K, CelestialBody)], direction: Direction) {
    for i in 1..bucket.len() {
        let mut j = i;
        while j > 0 && precedes(&bucket[j].0, &bucket[j - 1].0, direction) {
            bucket.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn precedes<K: PartialOrd>(a: &K, b: &K, direction: Direction) -> bool {
    match direction {
        Direction::Ascending => a < b,
        Direction::Descending => a > b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrreryError;
    use crate::model::default_bodies;

    fn body(name: &str, distance: f64, mass: f64, period: f64) -> CelestialBody {
        CelestialBody::new(name, distance, mass, period).unwrap()
    }

    fn names(bodies: &[CelestialBody]) -> Vec<&str> {
        bodies.iter().map(|b| b.name.as_str()).collect()
    }

    fn shuffled() -> Vec<CelestialBody> {
        vec![
            body("Earth", 1.00, 1.0, 365.0),
            body("Mercury", 0.39, 0.0553, 88.0),
            body("Venus", 0.72, 0.815, 225.0),
        ]
    }

    #[test]
    fn distance_toggles_between_directions() {
        let mut engine = SortEngine::new();
        let mut bodies = shuffled();

        let first = engine.sort_by(&mut bodies, Field::Distance);
        assert_eq!(first, Direction::Ascending);
        assert_eq!(names(&bodies), ["Mercury", "Venus", "Earth"]);

        let second = engine.sort_by(&mut bodies, Field::Distance);
        assert_eq!(second, Direction::Descending);
        assert_eq!(names(&bodies), ["Earth", "Venus", "Mercury"]);
    }

    #[test]
    fn double_sort_resets_toggle() {
        let mut engine = SortEngine::new();
        let mut bodies = default_bodies();

        engine.sort_by(&mut bodies, Field::Mass);
        let after_first = bodies.clone();
        engine.sort_by(&mut bodies, Field::Mass);
        assert!(!engine.state().is_descending(Field::Mass));

        engine.sort_by(&mut bodies, Field::Mass);
        assert_eq!(bodies, after_first);
    }

    #[test]
    fn toggles_are_independent_per_field() {
        let mut engine = SortEngine::new();
        let mut bodies = default_bodies();

        engine.sort_by(&mut bodies, Field::Distance);
        assert_eq!(
            engine.sort_by(&mut bodies, Field::Mass),
            Direction::Ascending
        );
        assert_eq!(
            engine.sort_by(&mut bodies, Field::Distance),
            Direction::Descending
        );
        assert!(engine.state().is_descending(Field::Mass));
        assert!(!engine.state().is_descending(Field::Name));
    }

    #[test]
    fn every_field_matches_reference_order_in_both_directions() {
        let reference = |field: Field, descending: bool| {
            let mut expected = default_bodies();
            expected.sort_by(|a, b| {
                let ord = match field {
                    Field::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                    Field::Distance => a.distance.partial_cmp(&b.distance).unwrap(),
                    Field::Mass => a.mass.partial_cmp(&b.mass).unwrap(),
                    Field::OrbitalPeriod => a.orbital_period.partial_cmp(&b.orbital_period).unwrap(),
                };
                if descending {
                    ord.reverse()
                } else {
                    ord
                }
            });
            expected
        };

        for field in Field::ALL {
            let mut engine = SortEngine::new();
            let mut bodies = default_bodies();
            engine.sort_by(&mut bodies, field);
            assert_eq!(bodies, reference(field, false), "ascending {}", field);
            engine.sort_by(&mut bodies, field);
            assert_eq!(bodies, reference(field, true), "descending {}", field);
        }
    }

    #[test]
    fn sorting_is_a_permutation() {
        let key = |b: &CelestialBody| format!("{}", b);
        for field in Field::ALL {
            let mut engine = SortEngine::new();
            let mut bodies = default_bodies();
            bodies.push(body("Ceres", 2.77, 0.00016, 1682.0));
            let mut before: Vec<_> = bodies.iter().map(key).collect();
            before.sort();

            engine.sort_by(&mut bodies, field);
            let mut after: Vec<_> = bodies.iter().map(key).collect();
            after.sort();
            assert_eq!(before, after, "{}", field);
        }
    }

    #[test]
    fn equal_values_stay_grouped_in_original_order() {
        let mut bodies = vec![
            body("C", 2.0, 1.0, 10.0),
            body("A", 2.0, 2.0, 10.0),
            body("B", 2.0, 3.0, 10.0),
        ];
        let original = bodies.clone();
        let mut engine = SortEngine::new();

        engine.sort_by(&mut bodies, Field::Distance);
        assert_eq!(bodies, original);
        engine.sort_by(&mut bodies, Field::Distance);
        assert_eq!(bodies, original);
    }

    #[test]
    fn empty_and_single_collections() {
        let mut engine = SortEngine::new();
        let mut empty: Vec<CelestialBody> = Vec::new();
        engine.sort_by(&mut empty, Field::Distance);
        assert!(empty.is_empty());

        let mut single = vec![body("Sol", 0.0, 1.0, 0.0)];
        engine.sort_by(&mut single, Field::Name);
        assert_eq!(names(&single), ["Sol"]);
        assert!(engine.state().is_descending(Field::Name));
    }

    #[test]
    fn name_sort_is_case_insensitive_and_toggles() {
        let mut bodies = vec![
            body("venus", 0.72, 0.815, 225.0),
            body("Earth", 1.0, 1.0, 365.0),
            body("2001 Mars", 1.52, 0.1, 687.0),
            body("Ärm", 1.0, 1.0, 1.0),
            body("ceres", 2.77, 0.0002, 1682.0),
            body("Zeta", 1.0, 1.0, 1.0),
        ];
        let mut engine = SortEngine::new();

        engine.sort_by(&mut bodies, Field::Name);
        assert_eq!(
            names(&bodies),
            ["2001 Mars", "ceres", "Earth", "venus", "Zeta", "Ärm"]
        );
        engine.sort_by(&mut bodies, Field::Name);
        assert_eq!(
            names(&bodies),
            ["Ärm", "Zeta", "venus", "Earth", "ceres", "2001 Mars"]
        );
    }

    #[test]
    fn unknown_key_is_rejected_without_side_effects() {
        let mut engine = SortEngine::new();
        let mut bodies = shuffled();
        let err = engine.sort_by_key(&mut bodies, "color").unwrap_err();

        assert!(matches!(err, OrreryError::UnknownField(_)));
        assert_eq!(bodies, shuffled());
        assert_eq!(*engine.state(), SortState::new());
    }

    #[test]
    fn sort_by_key_accepts_known_keys() {
        let mut engine = SortEngine::new();
        let mut bodies = shuffled();
        let direction = engine.sort_by_key(&mut bodies, "orbital_period").unwrap();
        assert_eq!(direction, Direction::Ascending);
        assert_eq!(names(&bodies), ["Mercury", "Venus", "Earth"]);
    }

    #[test]
    fn fixed_direction_sort() {
        let mut bodies = shuffled();
        sort_in_direction(&mut bodies, Field::Mass, Direction::Descending);
        assert_eq!(names(&bodies), ["Earth", "Venus", "Mercury"]);
    }
}
