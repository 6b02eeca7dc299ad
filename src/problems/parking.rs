//! Cars in a parking lot have to be moved onto their own slots, one step at
//! a time. Driving across another car's slot is allowed but expensive.

use crate::{
    problems::{
        grid::{grid_lines, Direction, Point},
        ParseError,
    },
    search::Problem,
};
use smallvec::SmallVec;
use std::collections::{BTreeMap, HashMap, HashSet};
use strum::IntoEnumIterator;

const TYPICAL_NUM_CARS: usize = 4;

/// Cost of a move onto a slot that belongs to a different car.
pub const FOREIGN_SLOT_COST: f64 = 101.;

/// Position of car `i` at index `i`.
pub type ParkingState = SmallVec<[Point; TYPICAL_NUM_CARS]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParkingAction {
    pub car: usize,
    pub direction: Direction,
}

impl ParkingAction {
    pub fn new(car: usize, direction: Direction) -> Self {
        Self { car, direction }
    }
}

#[derive(Debug, Clone)]
pub struct ParkingProblem {
    /// Every cell that is not a wall
    passages: HashSet<Point>,
    cars: ParkingState,
    /// Slot position to the index of the car it belongs to
    slots: HashMap<Point, usize>,
    width: usize,
    height: usize,
}

impl ParkingProblem {
    /// Read a parking lot drawn with `#` walls, `.` floor, `A`-`J` cars and
    /// `0`-`9` slots, where slot `0` belongs to car `A` and so on.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        let mut passages = HashSet::new();
        let mut cars = BTreeMap::new();
        let mut slots = BTreeMap::new();
        let mut width = 0;
        let mut height = 0;

        for (y, line) in grid_lines(text).enumerate() {
            height += 1;
            width = width.max(line.chars().count());
            for (x, tile) in line.chars().enumerate() {
                let point = Point::new(x as i32, y as i32);
                let labels = match tile {
                    '#' => continue,
                    '.' => None,
                    'A'..='J' => Some((&mut cars, tile as usize - 'A' as usize)),
                    '0'..='9' => Some((&mut slots, tile as usize - '0' as usize)),
                    _ => {
                        return Err(ParseError::UnknownTile {
                            tile,
                            line: y + 1,
                            column: x + 1,
                        })
                    }
                };
                passages.insert(point);
                if let Some((labels, index)) = labels {
                    if labels.insert(index, point).is_some() {
                        return Err(ParseError::DuplicateMarker(tile));
                    }
                }
            }
        }

        if cars.is_empty() {
            return Err(ParseError::MissingMarker('A'));
        }
        check_contiguous(&cars, 'A')?;
        check_contiguous(&slots, '0')?;

        Ok(Self {
            passages,
            cars: cars.into_values().collect(),
            slots: slots.into_iter().map(|(car, point)| (point, car)).collect(),
            width,
            height,
        })
    }

    pub fn num_cars(&self) -> usize {
        self.cars.len()
    }

    /// The car that owns the slot at `point`, if there is one.
    pub fn slot_owner(&self, point: Point) -> Option<usize> {
        self.slots.get(&point).copied()
    }

    /// Draw `state` in the same format [`ParkingProblem::from_text`] reads.
    /// Cars hide the slot they stand on.
    pub fn format_state(&self, state: &ParkingState) -> String {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        let point = Point::new(x as i32, y as i32);
                        if let Some(car) = state.iter().position(|&car| car == point) {
                            label(b'A', car)
                        } else if let Some(slot) = self.slot_owner(point) {
                            label(b'0', slot)
                        } else if self.passages.contains(&point) {
                            '.'
                        } else {
                            '#'
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn label(first: u8, index: usize) -> char {
    char::from(first + index as u8)
}

/// Labels must run from `first` without gaps.
fn check_contiguous(labels: &BTreeMap<usize, Point>, first: char) -> Result<(), ParseError> {
    match labels
        .keys()
        .enumerate()
        .find(|&(expected, &index)| expected != index)
    {
        Some((expected, _)) => Err(ParseError::NonContiguousLabels {
            first,
            missing: label(first as u8, expected),
        }),
        None => Ok(()),
    }
}

impl Problem for ParkingProblem {
    type State = ParkingState;
    type Action = ParkingAction;

    fn initial_state(&self) -> Self::State {
        self.cars.clone()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        state
            .iter()
            .enumerate()
            .all(|(car, &position)| self.slot_owner(position) == Some(car))
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        let mut actions = Vec::new();
        for (car, &position) in state.iter().enumerate() {
            for direction in Direction::iter() {
                let target = position + direction.to_vector();
                if self.passages.contains(&target) && !state.contains(&target) {
                    actions.push(ParkingAction::new(car, direction));
                }
            }
        }
        actions
    }

    fn successor(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        let mut successor = state.clone();
        successor[action.car] = state[action.car] + action.direction.to_vector();
        successor
    }

    fn cost(&self, state: &Self::State, action: &Self::Action) -> f64 {
        let target = state[action.car] + action.direction.to_vector();
        match self.slot_owner(target) {
            Some(owner) if owner != action.car => FOREIGN_SLOT_COST,
            _ => 1.,
        }
    }
}
