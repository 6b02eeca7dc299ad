//! A single player walks through a dungeon, picks up every coin and leaves
//! through the exit.

use crate::{
    problems::{
        grid::{euclidean_distance, grid_lines, manhattan_distance, Direction, Point},
        ParseError,
    },
    search::Problem,
};
use once_cell::sync::OnceCell;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use strum::IntoEnumIterator;

#[derive(Debug, Clone)]
pub struct DungeonLayout {
    pub width: usize,
    pub height: usize,
    /// Every cell that is not a wall
    pub walkable: HashSet<Point>,
    pub exit: Point,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DungeonState {
    pub player: Point,
    pub remaining_coins: BTreeSet<Point>,
}

#[derive(Debug)]
pub struct DungeonProblem {
    layout: DungeonLayout,
    initial_state: DungeonState,
    /// Maze distance from every reachable cell to the exit, computed on first
    /// use by [`maze_distance_heuristic`].
    exit_distances: OnceCell<HashMap<Point, usize>>,
}

impl DungeonProblem {
    /// Read a dungeon drawn with `#` walls, `.` floor, `S` for the player,
    /// `E` for the exit and `$` for coins.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        let mut walkable = HashSet::new();
        let mut coins = BTreeSet::new();
        let mut player = None;
        let mut exit = None;
        let mut width = 0;
        let mut height = 0;

        for (y, line) in grid_lines(text).enumerate() {
            height += 1;
            width = width.max(line.chars().count());
            for (x, tile) in line.chars().enumerate() {
                let point = Point::new(x as i32, y as i32);
                match tile {
                    '#' => continue,
                    '.' => {}
                    '$' => {
                        coins.insert(point);
                    }
                    'S' | 'E' => {
                        let marker = if tile == 'S' { &mut player } else { &mut exit };
                        if marker.replace(point).is_some() {
                            return Err(ParseError::DuplicateMarker(tile));
                        }
                    }
                    _ => {
                        return Err(ParseError::UnknownTile {
                            tile,
                            line: y + 1,
                            column: x + 1,
                        })
                    }
                }
                walkable.insert(point);
            }
        }

        let player = player.ok_or(ParseError::MissingMarker('S'))?;
        let exit = exit.ok_or(ParseError::MissingMarker('E'))?;
        Ok(Self {
            layout: DungeonLayout {
                width,
                height,
                walkable,
                exit,
            },
            initial_state: DungeonState {
                player,
                remaining_coins: coins,
            },
            exit_distances: OnceCell::new(),
        })
    }

    pub fn layout(&self) -> &DungeonLayout {
        &self.layout
    }

    /// Breadth first flood fill from the exit. Computed once per problem and
    /// shared by every search running on it.
    pub fn exit_distances(&self) -> &HashMap<Point, usize> {
        self.exit_distances.get_or_init(|| {
            let mut distances = HashMap::from([(self.layout.exit, 0)]);
            let mut queue = VecDeque::from([self.layout.exit]);
            while let Some(point) = queue.pop_front() {
                let distance = distances[&point] + 1;
                for direction in Direction::iter() {
                    let next = point + direction.to_vector();
                    if self.layout.walkable.contains(&next) && !distances.contains_key(&next) {
                        distances.insert(next, distance);
                        queue.push_back(next);
                    }
                }
            }
            distances
        })
    }

    fn exit_distance(&self, point: Point) -> f64 {
        self.exit_distances()
            .get(&point)
            .map_or(f64::INFINITY, |&distance| distance as f64)
    }
}

impl Problem for DungeonProblem {
    type State = DungeonState;
    type Action = Direction;

    fn initial_state(&self) -> Self::State {
        self.initial_state.clone()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        state.player == self.layout.exit && state.remaining_coins.is_empty()
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        Direction::iter()
            .filter(|direction| {
                self.layout
                    .walkable
                    .contains(&(state.player + direction.to_vector()))
            })
            .collect()
    }

    fn successor(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        let player = state.player + action.to_vector();
        let mut remaining_coins = state.remaining_coins.clone();
        remaining_coins.remove(&player);
        DungeonState {
            player,
            remaining_coins,
        }
    }
}

/// Straight-line distance from the player to the exit. Admissible, but
/// ignores both walls and coins.
pub fn weak_heuristic(problem: &DungeonProblem, state: &DungeonState) -> f64 {
    euclidean_distance(state.player, problem.layout.exit)
}

/// Steps needed to sweep the bounding box of the remaining coins from the
/// player's position: the far side of each axis is walked once, the nearer
/// side twice. Once every coin is collected, the Manhattan distance to the
/// exit.
pub fn strong_heuristic(problem: &DungeonProblem, state: &DungeonState) -> f64 {
    let coins = &state.remaining_coins;
    let (Some(min_x), Some(max_x), Some(min_y), Some(max_y)) = (
        coins.iter().map(|coin| coin.x).min(),
        coins.iter().map(|coin| coin.x).max(),
        coins.iter().map(|coin| coin.y).min(),
        coins.iter().map(|coin| coin.y).max(),
    ) else {
        return f64::from(manhattan_distance(state.player, problem.layout.exit));
    };

    let left = (state.player.x - min_x).max(0);
    let right = (max_x - state.player.x).max(0);
    let up = (state.player.y - min_y).max(0);
    let down = (max_y - state.player.y).max(0);
    f64::from(left + right + left.min(right) + up + down + up.min(down))
}

/// True maze distance to the exit, raised by any coin that would need a
/// detour: the player has to reach the coin and then walk from it to the
/// exit. Distances are cached on the problem.
pub fn maze_distance_heuristic(problem: &DungeonProblem, state: &DungeonState) -> f64 {
    state
        .remaining_coins
        .iter()
        .map(|&coin| {
            f64::from(manhattan_distance(state.player, coin)) + problem.exit_distance(coin)
        })
        .fold(problem.exit_distance(state.player), f64::max)
}
