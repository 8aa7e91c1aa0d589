//! Unit tests for ped-entity.

#[cfg(test)]
mod pedestrian {
    use ped_core::Cell;

    use crate::Pedestrian;

    #[test]
    fn defaults() {
        let p = Pedestrian::new(1, 2);
        assert_eq!(p.cell, Cell::new(1, 2));
        assert_eq!(p.name, "P");
        assert_eq!(p.speed_meters_per_sec, 1.33);
        assert_eq!(p.age, 25);
        assert_eq!(p.steps_to_target, 0);
        assert_eq!(p.moved_cells, 1);
        assert_eq!(p.actual_speed, None);
        assert!(!p.is_finished);
        assert_eq!(p.measured_speed(), None);
    }

    #[test]
    fn name_gets_index_suffix() {
        let mut p = Pedestrian::new(0, 0).with_name("child");
        p.assign_index(3);
        assert_eq!(p.label(), "Pchild3");
    }

    #[test]
    fn move_to_same_cell_is_not_counted() {
        let mut p = Pedestrian::new(0, 0);
        assert!(!p.move_to(Cell::new(0, 0)));
        assert_eq!(p.moved_cells, 1);
        assert!(p.move_to(Cell::new(0, 1)));
        assert_eq!(p.moved_cells, 2);
        assert_eq!(p.cell, Cell::new(0, 1));
    }

    #[test]
    fn arrive_fixes_actual_speed() {
        let mut p = Pedestrian::new(0, 3);
        p.moved_cells = 4;
        p.steps_to_target = 4;
        p.arrive();
        assert!(p.is_finished);
        assert_eq!(p.moved_cells, 5);
        assert_eq!(p.actual_speed, Some((5.0 / 4.0) * 1.33));
    }

    #[test]
    fn speed_from_zero_steps_is_zero() {
        assert_eq!(Pedestrian::speed_from_counts(3, 0, 1.33), 0.0);
        assert_eq!(Pedestrian::speed_from_counts(3, 3, 2.0), 2.0);
    }

    #[test]
    fn builder_overrides() {
        let p = Pedestrian::new(0, 0).with_speed(0.8).with_age(70);
        assert_eq!(p.speed_meters_per_sec, 0.8);
        assert_eq!(p.age, 70);
    }
}

#[cfg(test)]
mod fixed {
    use ped_core::Cell;

    use crate::{Obstacle, Target};

    #[test]
    fn labels() {
        assert_eq!(Obstacle::new(0, 0).label(), "O");
        assert_eq!(Target::new(0, 0).label(), "T");
    }

    #[test]
    fn horizontal_line() {
        let wall = Obstacle::line(Cell::new(1, 4), Cell::new(1, 0));
        assert_eq!(wall.len(), 5);
        assert!(wall.iter().all(|o| o.cell.row == 1));
        assert_eq!(wall[0].cell, Cell::new(1, 0));
    }

    #[test]
    fn single_cell_line() {
        assert_eq!(Obstacle::line(Cell::new(2, 2), Cell::new(2, 2)), vec![Obstacle::new(2, 2)]);
    }
}

#[cfg(test)]
mod entity {
    use ped_core::Cell;

    use crate::{GridEntity, Obstacle, Pedestrian, Target};

    #[test]
    fn variants_share_cell_and_label() {
        let e: Vec<GridEntity> = vec![
            Pedestrian::new(0, 0).into(),
            Obstacle::new(1, 1).into(),
            Target::new(3, 4).into(),
        ];
        assert_eq!(e[0].label(), "P");
        assert_eq!(e[1].label(), "O");
        assert_eq!(e[2].cell(), Cell::new(3, 4));
        assert!(e[0].is_movable());
        assert!(!e[1].is_movable());
        assert_eq!(e[0].distance(&e[2]), 5.0);
    }
}
