use super::*;
use crate::core::PathError;

fn editor_with_three_points() -> PathEditor {
    let mut editor = PathEditor::new(Vec3::ZERO, PathEditorOptions::default());
    editor
        .handle_intent(PathIntent::InsertRequested { index: 2 })
        .expect("Anhängen erlaubt");
    editor
}

#[test]
fn test_new_syncs_loop_from_options() {
    let options = PathEditorOptions {
        close_loop: true,
        ..PathEditorOptions::default()
    };
    let editor = PathEditor::new(Vec3::ZERO, options);

    assert!(editor.path().is_loop());
    assert_eq!(editor.path().num_segments(), 2);
}

#[test]
fn test_loop_changed_updates_path_and_options() {
    let mut editor = editor_with_three_points();

    let outcome = editor
        .handle_intent(PathIntent::LoopChanged { closed: true })
        .unwrap();
    assert_eq!(outcome, EditOutcome::Applied);
    assert!(editor.options().close_loop);
    assert_eq!(editor.path().num_segments(), 3);

    let again = editor
        .handle_intent(PathIntent::LoopChanged { closed: true })
        .unwrap();
    assert_eq!(again, EditOutcome::Unchanged);
}

#[test]
fn test_position_move_keeps_tangents_attached() {
    let mut editor = editor_with_three_points();

    let outcome = editor
        .handle_intent(PathIntent::HandleMoved {
            index: 1,
            handle: PathHandle::Position,
            world_pos: Vec3::new(4.0, 2.0, 0.0),
        })
        .unwrap();

    assert_eq!(outcome, EditOutcome::Applied);
    let cp = editor.path().control_point(1).unwrap();
    assert_eq!(cp.position(), Vec3::new(4.0, 2.0, 0.0));
    assert_eq!(cp.tangent_world(TangentSide::Front), Vec3::new(5.0, 3.0, 1.0));
}

#[test]
fn test_unchanged_position_is_a_no_op() {
    let mut editor = editor_with_three_points();
    let before = editor.path().clone();

    let outcome = editor
        .handle_intent(PathIntent::HandleMoved {
            index: 0,
            handle: PathHandle::Position,
            world_pos: Vec3::ZERO,
        })
        .unwrap();

    assert_eq!(outcome, EditOutcome::Unchanged);
    assert_eq!(editor.path(), &before);
}

#[test]
fn test_tangent_handles_store_offset_for_both_sides() {
    let mut editor = editor_with_three_points();
    editor
        .handle_intent(PathIntent::HandleMoved {
            index: 1,
            handle: PathHandle::Position,
            world_pos: Vec3::new(5.0, 0.0, 0.0),
        })
        .unwrap();

    for (side, world) in [
        (TangentSide::Back, Vec3::new(3.0, 0.0, 1.0)),
        (TangentSide::Front, Vec3::new(7.0, 0.0, -1.0)),
    ] {
        let outcome = editor
            .handle_intent(PathIntent::HandleMoved {
                index: 1,
                handle: PathHandle::Tangent(side),
                world_pos: world,
            })
            .unwrap();
        assert_eq!(outcome, EditOutcome::Applied);
        let cp = editor.path().control_point(1).unwrap();
        assert_eq!(cp.tangent(side), world - Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(cp.tangent_world(side), world);
    }
}

#[test]
fn test_top_down_projects_moves_to_ground() {
    let options = PathEditorOptions {
        top_down: true,
        ..PathEditorOptions::default()
    };
    let mut editor = PathEditor::new(Vec3::new(0.0, 4.0, 0.0), options);

    editor
        .handle_intent(PathIntent::HandleMoved {
            index: 0,
            handle: PathHandle::Tangent(TangentSide::Front),
            world_pos: Vec3::new(2.0, 9.0, 1.0),
        })
        .unwrap();

    let cp = editor.path().control_point(0).unwrap();
    // Offset relativ zur projizierten Position (y = 0)
    assert_eq!(cp.front_tangent(), Vec3::new(2.0, 0.0, 1.0));

    editor
        .handle_intent(PathIntent::HandleMoved {
            index: 0,
            handle: PathHandle::Position,
            world_pos: Vec3::new(1.0, 9.0, 1.0),
        })
        .unwrap();
    assert_eq!(
        editor.path().control_point(0).unwrap().position(),
        Vec3::new(1.0, 0.0, 1.0)
    );
}

#[test]
fn test_insert_places_point_next_to_clicked_point() {
    let mut editor = PathEditor::new(Vec3::new(2.0, 0.0, 0.0), PathEditorOptions::default());

    let outcome = editor
        .handle_intent(PathIntent::InsertRequested { index: 0 })
        .unwrap();

    assert_eq!(outcome, EditOutcome::Applied);
    assert_eq!(editor.path().num_control_points(), 3);
    assert_eq!(
        editor.path().control_point(0).unwrap().position(),
        Vec3::new(2.0, 0.0, 0.0) + editor.options().insert_offset
    );
    assert_eq!(
        editor.path().control_point(1).unwrap().position(),
        Vec3::new(2.0, 0.0, 0.0)
    );
}

#[test]
fn test_insert_at_end_uses_last_point() {
    let mut editor = PathEditor::new(Vec3::ZERO, PathEditorOptions::default());
    editor
        .handle_intent(PathIntent::InsertRequested { index: 2 })
        .unwrap();

    assert_eq!(
        editor.path().control_point(2).unwrap().position(),
        Vec3::X + editor.options().insert_offset
    );
}

#[test]
fn test_remove_refused_at_minimum() {
    let mut editor = PathEditor::new(Vec3::ZERO, PathEditorOptions::default());

    let outcome = editor
        .handle_intent(PathIntent::RemoveRequested { index: 0 })
        .unwrap();

    assert!(matches!(outcome, EditOutcome::Refused { ref reason } if reason.contains('2')));
    assert_eq!(editor.path().num_control_points(), 2);
}

#[test]
fn test_remove_above_minimum_applies() {
    let mut editor = editor_with_three_points();

    let outcome = editor
        .handle_intent(PathIntent::RemoveRequested { index: 1 })
        .unwrap();

    assert_eq!(outcome, EditOutcome::Applied);
    assert_eq!(editor.path().num_control_points(), 2);
}

#[test]
fn test_bad_index_propagates_path_error() {
    let mut editor = editor_with_three_points();

    let err = editor
        .handle_intent(PathIntent::HandleMoved {
            index: 3,
            handle: PathHandle::Tangent(TangentSide::Back),
            world_pos: Vec3::ZERO,
        })
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<PathError>(),
        Some(&PathError::IndexOutOfRange { index: 3, len: 3 })
    );

    let err = editor
        .handle_intent(PathIntent::RemoveRequested { index: 7 })
        .unwrap_err();
    assert!(err.downcast_ref::<PathError>().is_some());

    let err = editor
        .handle_intent(PathIntent::InsertRequested { index: 5 })
        .unwrap_err();
    assert!(err.downcast_ref::<PathError>().is_some());
}

#[test]
fn test_build_scene_uses_options() {
    let options = PathEditorOptions {
        top_down: true,
        samples_per_segment: 2,
        ..PathEditorOptions::default()
    };
    let editor = PathEditor::new(Vec3::new(0.0, 1.0, 0.0), options);

    let scene = editor.build_scene();
    assert!(scene.flattened);
    assert_eq!(scene.segments.len(), 1);
    assert_eq!(scene.segments[0].polyline.len(), 3);
}

#[test]
fn test_remove_bad_index_at_minimum_is_an_error_not_a_refusal() {
    let mut editor = PathEditor::new(Vec3::ZERO, PathEditorOptions::default());

    let err = editor
        .handle_intent(PathIntent::RemoveRequested { index: 99 })
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<PathError>(),
        Some(&PathError::IndexOutOfRange { index: 99, len: 2 })
    );
    assert_eq!(editor.path().num_control_points(), 2);
}

#[test]
fn test_build_scene_carries_handle_sizes_from_options() {
    let options = PathEditorOptions {
        position_handle_size: 0.9,
        tangent_handle_size: 0.3,
        ..PathEditorOptions::default()
    };
    let editor = PathEditor::new(Vec3::ZERO, options);

    let scene = editor.build_scene();
    assert_eq!(scene.handles.len(), 2);
    assert!(scene
        .handles
        .iter()
        .all(|h| h.position_size == 0.9 && h.tangent_size == 0.3));
}
