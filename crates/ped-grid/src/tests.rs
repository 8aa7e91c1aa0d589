//! Unit tests for ped-grid.

use ped_core::{Cell, GridDims, ObstacleId, PedestrianId, TargetId};

use crate::{Grid, GridError, Occupant};

fn grid(width: u32, height: u32) -> Grid {
    Grid::new(GridDims::new(width, height)).unwrap()
}

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn starts_empty() {
        let g = grid(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.occupied_count(), 0);
        assert!(g.is_empty(Cell::new(2, 3)));
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            Grid::new(GridDims::new(0, 3)),
            Err(GridError::InvalidDimensions { height: 3, width: 0 })
        );
    }
}

#[cfg(test)]
mod occupancy {
    use super::*;

    #[test]
    fn out_of_bounds_is_never_empty() {
        let g = grid(3, 2);
        assert!(!g.is_empty(Cell::new(-1, 0)));
        assert!(!g.is_empty(Cell::new(0, -1)));
        assert!(!g.is_empty(Cell::new(2, 0))); // row == height
        assert!(!g.is_empty(Cell::new(0, 3))); // col == width
        assert_eq!(g.get(Cell::new(5, 5)), None);
    }

    #[test]
    fn place_and_clear() {
        let mut g = grid(3, 3);
        let c = Cell::new(1, 2);
        assert_eq!(g.place(c, Occupant::Pedestrian(PedestrianId(0))), None);
        assert!(!g.is_empty(c));
        assert_eq!(g.get(c), Some(Occupant::Pedestrian(PedestrianId(0))));
        assert_eq!(g.clear(c), Some(Occupant::Pedestrian(PedestrianId(0))));
        assert!(g.is_empty(c));
    }

    #[test]
    fn place_overwrites_and_reports_previous() {
        let mut g = grid(3, 3);
        let c = Cell::new(0, 0);
        g.place(c, Occupant::Pedestrian(PedestrianId(0)));
        let prev = g.place(c, Occupant::Target(TargetId(0)));
        assert_eq!(prev, Some(Occupant::Pedestrian(PedestrianId(0))));
        assert_eq!(g.get(c), Some(Occupant::Target(TargetId(0))));
        assert_eq!(g.occupied_count(), 1);
    }

    #[test]
    #[should_panic]
    fn place_out_of_bounds_panics() {
        let mut g = grid(2, 2);
        g.place(Cell::new(2, 0), Occupant::Obstacle(ObstacleId(0)));
    }

    #[test]
    fn try_place_checks_bounds() {
        let mut g = grid(2, 2);
        let err = g.try_place(Cell::new(0, 2), Occupant::Obstacle(ObstacleId(0)));
        assert!(matches!(err, Err(GridError::OutOfBounds { .. })));
        assert_eq!(g.try_place(Cell::new(1, 1), Occupant::Obstacle(ObstacleId(0))), Ok(None));
    }

    #[test]
    fn occupied_iterates_row_major() {
        let mut g = grid(3, 2);
        g.place(Cell::new(1, 0), Occupant::Obstacle(ObstacleId(1)));
        g.place(Cell::new(0, 2), Occupant::Obstacle(ObstacleId(0)));
        let cells: Vec<Cell> = g.occupied().map(|(c, _)| c).collect();
        assert_eq!(cells, [Cell::new(0, 2), Cell::new(1, 0)]);
    }
}

#[cfg(test)]
mod rendering {
    use super::*;

    #[test]
    fn labels_follow_grid_shape() {
        let mut g = grid(3, 2);
        g.place(Cell::new(0, 1), Occupant::Target(TargetId(0)));
        g.place(Cell::new(1, 2), Occupant::Obstacle(ObstacleId(0)));
        let labels = g.labels_with(|o| match o {
            Occupant::Target(_) => "T".into(),
            _ => "O".into(),
        });
        assert_eq!(labels, vec![vec![" ", "T", " "], vec![" ", " ", "O"]]);
    }

    #[test]
    fn occupant_kind() {
        assert_eq!(Occupant::Pedestrian(PedestrianId(0)).kind(), "pedestrian");
        assert!(Occupant::Target(TargetId(1)).is_target());
        assert!(!Occupant::Obstacle(ObstacleId(1)).is_pedestrian());
    }
}
