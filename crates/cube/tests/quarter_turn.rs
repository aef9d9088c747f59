use std::collections::HashSet;
use std::f32::consts::FRAC_PI_2;

use glam::{Mat3, Mat4, Vec3};

use rubiks::{
    Compositor, CompositorConfig, Cubelet, Direction, Error, Face, FaceLabelTable, Layer, Move,
    Position, SimulationLoop, Slot,
};

fn front_ring(table: &FaceLabelTable) -> Vec<Cubelet> {
    Position::RING
        .iter()
        .map(|p| table.occupant(Slot::new(Layer::Front, *p)))
        .collect()
}

#[test]
fn front_turn_over_810_substeps_relabels_once() {
    let mut compositor = Compositor::default();
    compositor.dispatch(Move::FrontClockwise).unwrap();

    let completed = compositor.advance_by(90 * 9).unwrap();

    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].face, Face::Front);
    assert_eq!(completed[0].direction, Direction::Clockwise);
    assert_eq!(compositor.counter(), 0);

    let mut expected = FaceLabelTable::new();
    expected.relabel(Layer::Front, Direction::Clockwise).unwrap();
    assert_eq!(compositor.labels(), &expected);

    let ring: HashSet<Cubelet> = front_ring(compositor.labels()).into_iter().collect();
    assert_eq!(ring.len(), 8);
    let center = Slot::new(Layer::Front, Position::Center);
    assert_eq!(compositor.labels().occupant(center), Cubelet::home(center));
}

#[test]
fn no_dispatch_means_no_motion() {
    let mut compositor = Compositor::default();

    let completed = compositor.advance_by(1000).unwrap();

    assert!(completed.is_empty());
    assert!(compositor.labels().is_identity());
    assert!(compositor.transforms().iter().all(|m| *m == Mat4::IDENTITY));
}

#[test]
fn four_front_turns_restore_labels() {
    let mut compositor = Compositor::default();
    for _ in 0..4 {
        compositor.dispatch(Move::FrontClockwise).unwrap();
    }

    let completed = compositor.advance_by(4 * compositor.steps_per_turn()).unwrap();

    assert_eq!(completed.len(), 4);
    assert!(compositor.labels().is_identity());
    for slot in Layer::Front.slots() {
        let transform = compositor.transform(Cubelet::home(slot));
        assert!(
            transform.abs_diff_eq(Mat4::IDENTITY, 1e-3),
            "{slot}: {transform:?}"
        );
    }
}

#[test]
fn right_column_rotates_about_x_through_cube_center() {
    let config = CompositorConfig::default();
    let mut compositor = Compositor::new(config.clone()).unwrap();
    compositor.dispatch(Move::RightColumn).unwrap();
    compositor.advance_by(compositor.steps_per_turn()).unwrap();

    let pivot = Layer::Middle.center(config.layer_spacing);
    let expected = Mat4::from_translation(pivot)
        * Mat4::from_axis_angle(Vec3::X, -FRAC_PI_2)
        * Mat4::from_translation(-pivot);

    for layer in Layer::ALL {
        let cubelet = Cubelet::home(Slot::new(layer, Position::Right));
        let transform = compositor.transform(cubelet);
        assert!(transform.abs_diff_eq(expected, 1e-3), "{layer:?}");
        assert!(
            Mat3::from_mat4(transform)
                .abs_diff_eq(Mat3::from_rotation_x(-FRAC_PI_2), 1e-4)
        );
    }

    let mut expected = FaceLabelTable::new();
    expected
        .relabel_face(Face::Right, Direction::CounterClockwise)
        .unwrap();
    assert_eq!(compositor.labels(), &expected);
}

#[test]
fn front_turn_after_right_column_moves_the_right_cubelets() {
    let config = CompositorConfig::default();
    let spacing = config.layer_spacing;
    let mut compositor = Compositor::new(config).unwrap();
    compositor.dispatch(Move::RightColumn).unwrap();
    compositor.dispatch(Move::FrontClockwise).unwrap();

    let completed = compositor.advance_by(2 * compositor.steps_per_turn()).unwrap();
    assert_eq!(completed.len(), 2);

    // Middle bottom-right reaches front right on the column turn, then the
    // front turn carries it up to front top.
    let traveller = Cubelet::home(Slot::new(Layer::Middle, Position::BottomRight));
    assert_eq!(
        compositor.labels().locate(traveller),
        Slot::new(Layer::Front, Position::Top)
    );

    for (slot, cubelet) in compositor.labels().iter() {
        let moved = compositor
            .transform(cubelet)
            .transform_point3(cubelet.home_slot().center(spacing));
        assert!(
            moved.abs_diff_eq(slot.center(spacing), 1e-3),
            "{slot} holds {cubelet} but it is at {moved}"
        );
    }
}

#[test]
fn finer_steps_take_more_ticks() {
    let config = CompositorConfig {
        step_degrees: 0.5,
        ..Default::default()
    };
    let mut compositor = Compositor::new(config).unwrap();
    compositor.dispatch(Move::FrontClockwise).unwrap();

    assert!(compositor.advance_by(179).unwrap().is_empty());
    assert!(compositor.advance().unwrap().is_some());

    let rotation = Mat3::from_mat4(compositor.transform(Cubelet::home(Slot::new(
        Layer::Front,
        Position::Left,
    ))));
    assert!(rotation.abs_diff_eq(Mat3::from_rotation_z(FRAC_PI_2), 1e-4));
}

#[test]
fn unknown_move_index_is_an_error() {
    assert_eq!(Move::from_index(3), Err(Error::UnknownMove(3)));
    assert_eq!(Move::from_index(0), Err(Error::UnknownMove(0)));
}

#[test]
fn simulation_loop_runs_script_at_fixed_rate() {
    let mut script = vec![Move::RightColumn, Move::FrontClockwise];
    let mut sim = SimulationLoop::new(60, Compositor::default(), move |compositor| {
        while let Some(mv) = script.pop() {
            compositor.dispatch(mv).unwrap();
        }
    });

    let mut completed = Vec::new();
    // 0.2s per update stays under the 0.25s clamp: 12 ticks each.
    for _ in 0..20 {
        completed.extend(sim.update(0.2).unwrap());
    }

    let moves: Vec<Move> = completed.iter().map(|t| t.mv).collect();
    assert_eq!(moves, vec![Move::FrontClockwise, Move::RightColumn]);
    assert!(sim.compositor().is_idle());
}
