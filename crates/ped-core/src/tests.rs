//! Unit tests for ped-core primitives.

#[cfg(test)]
mod ids {
    use crate::{PedestrianId, TargetId};

    #[test]
    fn index_roundtrip() {
        let id = PedestrianId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PedestrianId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering_follows_list_position() {
        assert!(PedestrianId(0) < PedestrianId(1));
        assert!(TargetId(3) > TargetId(2));
    }

    #[test]
    fn display() {
        assert_eq!(PedestrianId(7).to_string(), "PedestrianId(7)");
    }
}

#[cfg(test)]
mod cell {
    use crate::{Cell, Direction};

    #[test]
    fn neighbors_follow_axis_convention() {
        let c = Cell::new(2, 2);
        assert_eq!(c.neighbor(Direction::Up),    Cell::new(1, 2));
        assert_eq!(c.neighbor(Direction::Down),  Cell::new(3, 2));
        assert_eq!(c.neighbor(Direction::Left),  Cell::new(2, 1));
        assert_eq!(c.neighbor(Direction::Right), Cell::new(2, 3));
    }

    #[test]
    fn neighbors_iterate_in_evaluation_order() {
        let dirs: Vec<Direction> = Cell::new(0, 0).neighbors().map(|(d, _)| d).collect();
        assert_eq!(dirs, [Direction::Left, Direction::Right, Direction::Up, Direction::Down]);
    }

    #[test]
    fn border_neighbor_is_representable() {
        let c = Cell::new(0, 0).neighbor(Direction::Up);
        assert_eq!(c, Cell::new(-1, 0));
        assert!(!c.is_within(5, 5));
    }

    #[test]
    fn euclidean_distance() {
        let a = Cell::new(0, 0);
        assert_eq!(a.distance(a), 0.0);
        assert_eq!(a.distance(Cell::new(3, 4)), 5.0);
        assert_eq!(Cell::new(3, 4).distance(a), 5.0);
    }

    #[test]
    fn bounds() {
        assert!(Cell::new(0, 0).is_within(5, 3));
        assert!(Cell::new(4, 2).is_within(5, 3));
        assert!(!Cell::new(5, 0).is_within(5, 3));
        assert!(!Cell::new(0, 3).is_within(5, 3));
        assert!(!Cell::new(0, -1).is_within(5, 3));
    }

    #[test]
    fn value_equality() {
        assert_eq!(Cell::new(1, 2), Cell::from((1, 2)));
        assert_ne!(Cell::new(1, 2), Cell::new(2, 1));
        assert_eq!(Cell::new(1, 2).to_string(), "(1, 2)");
    }
}

#[cfg(test)]
mod time {
    use crate::Step;

    #[test]
    fn next_and_display() {
        assert_eq!(Step::ZERO.next(), Step(1));
        assert_eq!(Step(10).next(), Step(11));
        assert_eq!(Step(3).to_string(), "S3");
    }
}

#[cfg(test)]
mod config {
    use crate::{GridDims, ModelConfig};

    #[test]
    fn cell_dimensions_are_used_as_is() {
        let cfg = ModelConfig::cells(5, 4);
        assert_eq!(cfg.grid_dims().unwrap(), GridDims::new(5, 4));
        assert!(cfg.disappear);
        assert_eq!(cfg.grid_unit, 10);
    }

    #[test]
    fn meter_dimensions_scale_by_three() {
        let cfg = ModelConfig::meters(50, 2);
        assert_eq!(cfg.grid_dims().unwrap(), GridDims::new(150, 6));
        assert_eq!(cfg.grid_dims().unwrap().cell_count(), 900);
    }

    #[test]
    fn empty_grid_rejected() {
        assert!(ModelConfig::cells(0, 4).validate().is_err());
        assert!(ModelConfig::cells(4, 0).validate().is_err());
        assert!(ModelConfig::cells(1, 1).validate().is_ok());
    }

    #[test]
    fn overflowing_meter_grid_rejected() {
        assert!(ModelConfig::meters(u32::MAX, 1).validate().is_err());
    }

    #[test]
    fn zero_stall_window_rejected() {
        let mut cfg = ModelConfig::cells(3, 3);
        cfg.stall_steps = Some(0);
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut a: Vec<u32> = (0..50).collect();
        let mut b = a.clone();
        SimRng::new(12345).shuffle(&mut a);
        SimRng::new(12345).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(7);
        let mut v: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }
}
