//! Animation System Tests
//!
//! Tests for:
//! - FrameSampler range, periodicity and period boundary
//! - Truncate-then-abs mapping of negative and infinite times
//! - AnimationClip construction-time validation
//! - PoseEvaluator matrix and dual-quaternion palettes (single-frame reads)
//! - PlaybackState advance and wraparound reset

use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};

use skinpose::animation::{AnimationClip, FramePose, PlaybackState, PoseEvaluator, RigidPose};
use skinpose::math::{BONE_COUNT, MAX_BONE_COUNT, PoseError, SkeletonLayout, UnitDualQuaternion};

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON * a.length().max(1.0) * 10.0
}

/// Same rotation, allowing for the `q` / `-q` double cover.
fn quat_approx(a: Quat, b: Quat) -> bool {
    (a.dot(b).abs() - 1.0).abs() < 1e-4
}

/// Pose of bone `bone` in frame `frame`; every (frame, bone) pair is distinct.
fn pose_for(frame: usize, bone: usize) -> RigidPose {
    let angle = frame as f32 * 0.35 + bone as f32 * 0.1;
    RigidPose::new(
        Quat::from_axis_angle(Vec3::new(0.0, 1.0, 1.0).normalize(), angle),
        Vec3::new(frame as f32, bone as f32 * 0.5, (frame + bone) as f32 * 0.25),
    )
}

fn make_clip(frame_count: usize, bone_count: usize, duration: f32) -> AnimationClip {
    let frames = (0..frame_count)
        .map(|f| (0..bone_count).map(|b| pose_for(f, b)).collect())
        .collect();
    AnimationClip::new(
        "test",
        SkeletonLayout::new(bone_count).unwrap(),
        duration,
        frames,
    )
    .unwrap()
}

// ============================================================================
// FrameSampler: time -> frame index
// ============================================================================

#[test]
fn frame_index_stays_in_range() {
    let clip = make_clip(7, 2, 2.3);
    let mut t = 0.0_f32;
    while t < 50.0 {
        let index = clip.frame_index_at(t);
        assert!(index < clip.frame_count(), "t={t} -> {index}");
        t += 0.037;
    }
    for t in [f32::MAX, f32::MIN_POSITIVE, 1e30, -1e30, -0.001] {
        assert!(clip.frame_index_at(t) < clip.frame_count(), "t={t}");
    }
}

#[test]
fn frame_index_is_periodic_for_non_negative_time() {
    let clip = make_clip(4, 1, 8.0);
    for t in [0.0_f32, 0.5, 1.25, 2.0, 3.0, 5.5, 7.75] {
        let base = clip.frame_index_at(t);
        for k in 0..6 {
            let shifted = t + k as f32 * 8.0;
            assert_eq!(clip.frame_index_at(shifted), base, "t={t}, k={k}");
        }
    }
}

#[test]
fn period_boundary_wraps_to_first_frame() {
    let clip = make_clip(4, 1, 8.0);
    assert_eq!(clip.frame_index_at(0.0), 0);
    assert_eq!(clip.frame_index_at(8.0), 0);
    assert_eq!(clip.frame_index_at(16.0), 0);
}

#[test]
fn four_frame_eight_second_scenario() {
    let clip = make_clip(4, 3, 8.0);
    assert!(std::ptr::eq(clip.frame_pose_at(0.0), &clip.frames()[0]));
    assert!(std::ptr::eq(clip.frame_pose_at(8.0), &clip.frames()[0]));
    assert!(std::ptr::eq(clip.frame_pose_at(2.0), &clip.frames()[1]));
}

#[test]
fn negative_time_uses_mirrored_mapping() {
    // -2.0 / 8.0 = -0.25, truncates to 0, |−0.25| = 0.25 -> frame 1 (not 3)
    let clip = make_clip(4, 1, 8.0);
    assert_eq!(clip.frame_index_at(-2.0), 1);
    assert_eq!(clip.frame_index_at(-2.0), clip.frame_index_at(2.0));
}

#[test]
fn infinite_time_selects_first_frame() {
    let clip = make_clip(5, 1, 3.0);
    assert_eq!(clip.frame_index_at(f32::INFINITY), 0);
    assert_eq!(clip.frame_index_at(f32::NEG_INFINITY), 0);
}

#[test]
#[should_panic(expected = "NaN")]
fn nan_time_fails_fast() {
    let clip = make_clip(2, 1, 1.0);
    let _ = clip.frame_pose_at(f32::NAN);
}

#[test]
fn single_frame_clip_always_returns_it() {
    let clip = make_clip(1, 2, 0.5);
    for t in [0.0, 0.25, 0.49, 0.5, 17.3, -4.0] {
        assert_eq!(clip.frame_index_at(t), 0);
    }
}

// ============================================================================
// AnimationClip: construction
// ============================================================================

#[test]
fn clip_reports_its_shape() {
    let clip = make_clip(10, 3, 2.5);
    assert_eq!(clip.frame_count(), 10);
    assert_eq!(clip.bone_count(), 3);
    assert!((clip.duration() - 2.5).abs() < EPSILON);
    assert!((clip.time_step() - 0.25).abs() < EPSILON);
    assert_eq!(clip.name, "test");
}

#[test]
fn clip_rejects_invalid_input() {
    let layout = SkeletonLayout::new(2).unwrap();
    let frame = || FramePose::new(vec![RigidPose::IDENTITY; 2]);

    assert_eq!(
        AnimationClip::new("c", layout, 0.0, vec![frame()]).unwrap_err(),
        PoseError::InvalidDuration(0.0)
    );
    assert_eq!(
        AnimationClip::new("c", layout, -1.0, vec![frame()]).unwrap_err(),
        PoseError::InvalidDuration(-1.0)
    );
    assert_eq!(
        AnimationClip::new("c", layout, 1.0, Vec::new()).unwrap_err(),
        PoseError::EmptyClip
    );
    assert_eq!(
        AnimationClip::new(
            "c",
            layout,
            1.0,
            vec![frame(), FramePose::new(vec![RigidPose::IDENTITY; 1])]
        )
        .unwrap_err(),
        PoseError::BoneCountMismatch {
            frame: 1,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn default_layout_clip_uses_default_bone_count() {
    let frames = vec![FramePose::new(vec![RigidPose::IDENTITY; BONE_COUNT]); 3];
    let clip = AnimationClip::new("idle", SkeletonLayout::default(), 1.0, frames).unwrap();
    assert_eq!(clip.bone_count(), BONE_COUNT);
}

#[test]
fn clip_is_shareable_across_threads() {
    let clip = Arc::new(make_clip(8, 4, 2.0));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let clip = Arc::clone(&clip);
            std::thread::spawn(move || {
                let mut out = [Mat4::IDENTITY; 4];
                PoseEvaluator::new(&clip).emit_bone_matrices(i as f32 * 0.5, &mut out);
                out[0]
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let m = handle.join().unwrap();
        let expected = clip.frame_pose_at(i as f32 * 0.5).bones()[0].to_matrix();
        assert_eq!(m, expected);
    }
}

// ============================================================================
// PoseEvaluator
// ============================================================================

#[test]
fn bone_matrices_match_selected_frame() {
    let clip = make_clip(4, 3, 8.0);
    let mut out = [Mat4::ZERO; MAX_BONE_COUNT];
    let written = PoseEvaluator::new(&clip).emit_bone_matrices(2.0, &mut out);
    assert_eq!(written, 3);

    for bone in 0..3 {
        let pose = pose_for(1, bone);
        let (scale, rotation, translation) = out[bone].to_scale_rotation_translation();
        assert!(vec3_approx(scale, Vec3::ONE));
        assert!(quat_approx(rotation, pose.rotation));
        assert!(vec3_approx(translation, pose.translation));
    }
    assert_eq!(out[3], Mat4::ZERO);
}

#[test]
fn bone_dual_quaternions_match_selected_frame() {
    let clip = make_clip(4, 3, 8.0);
    let mut out = [UnitDualQuaternion::IDENTITY; 3];
    let written = PoseEvaluator::new(&clip).emit_bone_dual_quaternions(6.5, &mut out);
    assert_eq!(written, 3);

    for (bone, dq) in out.iter().enumerate() {
        let pose = pose_for(3, bone);
        assert_eq!(dq.real, pose.rotation);
        assert!(vec3_approx(dq.translation(), pose.translation));
    }
}

#[test]
fn both_palettes_come_from_the_same_frame() {
    let clip = make_clip(9, 5, 3.0);
    let evaluator = PoseEvaluator::new(&clip);

    let mut t = 0.0_f32;
    while t < 7.0 {
        let mut matrices = [Mat4::IDENTITY; 5];
        let mut dual_quats = [UnitDualQuaternion::IDENTITY; 5];
        evaluator.emit_bone_matrices(t, &mut matrices);
        evaluator.emit_bone_dual_quaternions(t, &mut dual_quats);

        let mut palette_m = [Mat4::IDENTITY; 5];
        let mut palette_dq = [UnitDualQuaternion::IDENTITY; 5];
        evaluator.emit_skinning_palette(t, &mut palette_m, &mut palette_dq);
        assert_eq!(matrices, palette_m);
        assert_eq!(dual_quats, palette_dq);

        for (m, dq) in matrices.iter().zip(&dual_quats) {
            let (_, rotation, translation) = m.to_scale_rotation_translation();
            let (dq_rotation, dq_translation) = dq.to_rigid_transform();
            assert!(quat_approx(rotation, dq_rotation), "t={t}");
            assert!(vec3_approx(translation, dq_translation), "t={t}");
        }
        t += 0.19;
    }
}

#[test]
#[should_panic(expected = "bone matrix buffer holds 2 entries")]
fn undersized_matrix_buffer_panics() {
    let clip = make_clip(2, 3, 1.0);
    let mut out = [Mat4::IDENTITY; 2];
    PoseEvaluator::new(&clip).emit_bone_matrices(0.0, &mut out);
}

// ============================================================================
// PlaybackState
// ============================================================================

#[test]
fn playback_defaults_to_unit_rate() {
    let state = PlaybackState::new(Mat4::IDENTITY, 0.25, 2.0);
    assert_eq!(state.rate, 1.0);
    assert_eq!(state.time, 0.25);
    assert_eq!(state.duration(), 2.0);
}

#[test]
fn playback_resets_after_passing_duration() {
    let mut state = PlaybackState::new(Mat4::IDENTITY, 0.0, 1.0);
    for _ in 0..3 {
        state.advance(0.25);
    }
    assert!((state.time - 0.75).abs() < EPSILON);
    state.advance(0.25);
    assert!((state.time - 1.0).abs() < EPSILON);
    state.advance(0.25);
    assert_eq!(state.time, 0.0);
}

#[test]
fn playback_time_always_samples_a_valid_frame() {
    let clip = make_clip(6, 2, 1.5);
    let mut state = PlaybackState::new(Mat4::IDENTITY, 1.2, clip.duration()).with_rate(1.7);
    for _ in 0..200 {
        state.advance(1.0 / 60.0);
        assert!(state.time >= 0.0 && state.time <= clip.duration() + 1.7 / 60.0);
        assert!(clip.frame_index_at(state.time) < clip.frame_count());
    }
}

#[test]
fn instances_advance_independently() {
    let mut a = PlaybackState::new(Mat4::IDENTITY, 0.0, 4.0);
    let mut b = PlaybackState::new(Mat4::from_translation(Vec3::X), 1.0, 4.0).with_rate(0.5);
    a.advance(1.0);
    b.advance(1.0);
    assert!((a.time - 1.0).abs() < EPSILON);
    assert!((b.time - 1.5).abs() < EPSILON);
    assert_ne!(a.world, b.world);
}
