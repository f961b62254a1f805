use gridstar_core::{Grid, Point};

use crate::error::SearchError;
use crate::state::SearchState;

/// Walk predecessor links from `goal_idx` back to the start and return the
/// cells in start-to-goal order.
///
/// A chain longer than the table has entries can only be a cycle, which is
/// reported instead of looping forever.
pub(crate) fn reconstruct(
    grid: &Grid,
    state: &SearchState,
    goal_idx: usize,
) -> Result<Vec<Point>, SearchError> {
    let mut path = Vec::new();
    let mut cur = Some(goal_idx);
    while let Some(ci) = cur {
        if path.len() >= state.len() {
            return Err(SearchError::PredecessorCycle { at: grid.point(ci) });
        }
        path.push(grid.point(ci));
        cur = state.parent(ci);
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_links_and_reverses() {
        let grid = Grid::new(3, 1).unwrap();
        let mut st = SearchState::new(grid.len());
        st.node_mut(1).parent = Some(0);
        st.node_mut(2).parent = Some(1);
        assert_eq!(
            reconstruct(&grid, &st, 2).unwrap(),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn lone_goal_is_its_own_path() {
        let grid = Grid::new(2, 2).unwrap();
        let st = SearchState::new(grid.len());
        assert_eq!(reconstruct(&grid, &st, 3).unwrap(), vec![Point::new(1, 1)]);
    }

    #[test]
    fn cycle_is_reported() {
        let grid = Grid::new(2, 1).unwrap();
        let mut st = SearchState::new(grid.len());
        st.node_mut(0).parent = Some(1);
        st.node_mut(1).parent = Some(0);
        assert!(matches!(
            reconstruct(&grid, &st, 1),
            Err(SearchError::PredecessorCycle { .. })
        ));
    }
}
