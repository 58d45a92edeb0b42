use approx::assert_relative_eq;
use posekit::kernels::orientation as kernels;
use posekit::{orientation, pose, position, random, ConversionError, EulerConvention, Tensor};
use rand::{rngs::StdRng, SeedableRng};
use std::f64::consts::FRAC_PI_2;

fn assert_quaternion_eq_up_to_sign(a: &[f64; 4], b: &[f64; 4], epsilon: f64) {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let sign = dot.signum();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_relative_eq!(*x, sign * y, epsilon = epsilon);
    }
}

fn quaternion_axis_angle_roundtrip<const N: usize>(batch_shape: [usize; N], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let quaternion = random::random_quaternion::<f64, _, N>(&mut rng, batch_shape);

    let axis_angle = orientation::quaternion_to_axis_angle(&quaternion);
    let recovered = orientation::axis_angle_to_quaternion(&axis_angle);

    assert_eq!(recovered.shape, batch_shape);
    for (a, b) in recovered.iter().zip(quaternion.iter()) {
        assert_quaternion_eq_up_to_sign(a, b, 1e-9);
    }
}

#[test]
fn quaternion_axis_angle_roundtrip_batch_shapes() {
    quaternion_axis_angle_roundtrip([], 0);
    quaternion_axis_angle_roundtrip([5], 1);
    quaternion_axis_angle_roundtrip([2, 3], 2);
}

#[test]
fn rot_mat_rot_vec_roundtrip() {
    let mut rng = StdRng::seed_from_u64(3);
    let rot_mat = random::random_rot_mat::<f64, _, 1>(&mut rng, [256]);

    let recovered = orientation::rot_vec_to_rot_mat(&orientation::rot_mat_to_rot_vec(&rot_mat));
    for (a, b) in recovered.iter().zip(rot_mat.iter()) {
        for (row_a, row_b) in a.iter().zip(b.iter()) {
            for (va, vb) in row_a.iter().zip(row_b.iter()) {
                assert_relative_eq!(va, vb, epsilon = 1e-6);
            }
        }
    }
}

#[test]
fn rot_mat_to_rot_vec_identity_is_zero() {
    let identity = Tensor::<[[f64; 3]; 3], 1>::from_shape_val(
        [3],
        [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    );
    let rot_vec = orientation::rot_mat_to_rot_vec(&identity);
    assert!(rot_vec.iter().all(|v| *v == [0.0, 0.0, 0.0]));
}

#[test]
fn rot_vec_to_euler_to_quaternion_composition() -> Result<(), ConversionError> {
    let rot_vec = Tensor::<[f64; 3], 1>::from_shape_vec([1], vec![[0.0, FRAC_PI_2, 0.0]])?;
    let convention: EulerConvention = "zyx".parse()?;

    let rot_mat = orientation::rot_vec_to_rot_mat(&rot_vec);
    let euler = orientation::rot_mat_to_euler(&rot_mat, convention);
    let quaternion = orientation::euler_to_quaternion(&euler, convention);

    let expected = Tensor::<[[f64; 3]; 3], 1>::from_shape_vec(
        [1],
        vec![[[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]]],
    )?;
    let expected = orientation::rot_mat_to_quaternion(&expected);

    for (a, b) in quaternion.iter().zip(expected.iter()) {
        for (va, vb) in a.iter().zip(b.iter()) {
            assert_relative_eq!(va, vb, epsilon = 1e-6);
        }
    }
    Ok(())
}

#[test]
fn velocity_integration_from_identity() -> Result<(), ConversionError> {
    let identity =
        Tensor::<[f64; 7], 1>::from_shape_vec([1], vec![[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]])?;
    let velocity = Tensor::<[f64; 7], 1>::from_shape_vec(
        [1],
        vec![[0.0, 0.0, 0.0, 0.0, 0.0, 0.5f64.sin(), 0.5f64.cos()]],
    )?;

    let next = pose::increment_quaternion_pose_with_velocity(&identity, &velocity, 1.0)?;
    for (a, b) in next.as_slice()[0][3..].iter().zip(velocity.as_slice()[0][3..].iter()) {
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn small_rotations_keep_unit_axis() -> Result<(), ConversionError> {
    let angles = [1e-7, 1e-6, 1e-5, 1e-4];
    let rot_vec = Tensor::<[f64; 3], 1>::from_shape_fn([4], |[i]| [0.0, 0.8 * angles[i], 0.6 * angles[i]]);

    let from_quaternion =
        orientation::quaternion_to_axis_angle(&orientation::rot_vec_to_quaternion(&rot_vec));
    let from_rot_mat = orientation::rot_mat_to_axis_angle(&orientation::rot_vec_to_rot_mat(&rot_vec));
    for axis_angle in from_quaternion.iter().chain(from_rot_mat.iter()) {
        let norm = axis_angle[..3].iter().map(|v| v * v).sum::<f64>().sqrt();
        assert_relative_eq!(norm, 1.0, epsilon = 1e-12);
    }
    for (i, axis_angle) in from_quaternion.iter().enumerate() {
        assert_relative_eq!(axis_angle[3], angles[i], max_relative = 1e-9);
    }

    let pose = Tensor::<[f32; 7], 1>::from_shape_vec([1], vec![[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]])?;
    let velocity = Tensor::<[f32; 7], 1>::from_shape_vec(
        [1],
        vec![[1.0, 0.0, 0.0, 0.0, 0.0, 1e-3f32.sin(), 1e-3f32.cos()]],
    )?;
    let next = pose::increment_quaternion_pose_with_velocity(&pose, &velocity, 0.5)?;
    let axis_angle = pose::quaternion_pose_to_axis_angle_pose(&next);
    let axis_angle = axis_angle.as_slice()[0];
    assert_relative_eq!(axis_angle[0], 0.5);
    assert_relative_eq!(axis_angle[5], 1.0, epsilon = 1e-6);
    assert_relative_eq!(axis_angle[6], 1e-3, max_relative = 1e-4);
    Ok(())
}

#[test]
fn batch_matches_single_element() {
    let mut rng = StdRng::seed_from_u64(4);
    let euler = random::random_euler::<f64, _, 2>(&mut rng, [3, 4], EulerConvention::Yzx);

    let batched = orientation::euler_to_quaternion(&euler, EulerConvention::Yzx);
    for (index, e) in euler.iter().enumerate() {
        let single = Tensor::<[f64; 3], 0>::from_shape_val([], *e);
        let single = orientation::euler_to_quaternion(&single, EulerConvention::Yzx);
        assert_eq!(batched.as_slice()[index], single.as_slice()[0]);
        assert_eq!(
            batched.as_slice()[index],
            kernels::euler_to_quaternion(e, EulerConvention::Yzx)
        );
    }
}

#[test]
fn all_conventions_roundtrip_through_every_representation() {
    let mut rng = StdRng::seed_from_u64(5);
    for convention in EulerConvention::ALL {
        let rot_mat = random::random_rot_mat::<f64, _, 1>(&mut rng, [16]);

        let euler = orientation::rot_mat_to_euler(&rot_mat, convention);
        let quaternion = orientation::euler_to_quaternion(&euler, convention);
        let axis_angle = orientation::quaternion_to_axis_angle(&quaternion);
        let rot_vec = orientation::axis_angle_to_rot_vec(&axis_angle);
        let recovered = orientation::rot_vec_to_rot_mat(&rot_vec);

        for (a, b) in recovered.iter().zip(rot_mat.iter()) {
            for (row_a, row_b) in a.iter().zip(b.iter()) {
                for (va, vb) in row_a.iter().zip(row_b.iter()) {
                    assert_relative_eq!(va, vb, epsilon = 1e-9);
                }
            }
        }
    }
}

#[test]
fn pose_conversions_keep_translation() {
    let mut rng = StdRng::seed_from_u64(6);
    let rot_vec = random::random_rot_vec::<f64, _, 1>(&mut rng, [8]);
    let rot_vec_pose = Tensor::<[f64; 6], 1>::from_shape_fn([8], |[i]| {
        let r = rot_vec.as_slice()[i];
        [i as f64, -(i as f64), 0.5, r[0], r[1], r[2]]
    });

    let convention = EulerConvention::Xzy;
    let euler_pose = pose::rot_vec_pose_to_euler_pose(&rot_vec_pose, convention);
    let quaternion_pose = pose::euler_pose_to_quaternion_pose(&euler_pose, convention);
    let axis_angle_pose = pose::quaternion_pose_to_axis_angle_pose(&quaternion_pose);
    let mat_pose = pose::axis_angle_pose_to_mat_pose(&axis_angle_pose);
    let recovered = pose::mat_pose_to_rot_vec_pose(&mat_pose);

    for (a, b) in recovered.iter().zip(rot_vec_pose.iter()) {
        assert_eq!(a[..3], b[..3]);
        for (va, vb) in a[3..].iter().zip(b[3..].iter()) {
            assert_relative_eq!(va, vb, epsilon = 1e-9);
        }
    }
}

#[test]
fn cartesian_polar_roundtrip() {
    let cartesian = Tensor::<[f64; 3], 2>::from_shape_fn([5, 5], |[i, j]| {
        [i as f64 - 2.0, j as f64 - 2.0, 0.25 * (i + j) as f64 - 1.1]
    });
    let polar = position::cartesian_to_polar_coords(&cartesian);
    let recovered = position::polar_to_cartesian_coords(&polar);
    for (a, b) in recovered.iter().zip(cartesian.iter()) {
        for (va, vb) in a.iter().zip(b.iter()) {
            assert_relative_eq!(va, vb, epsilon = 1e-12);
        }
    }
}

#[test]
fn polar_convention() {
    let cartesian = Tensor::<[f64; 3], 1>::from_shape_vec([2], vec![[0.0, 1.0, 0.0], [0.0, 0.0, 0.0]])
        .expect("valid shape");
    let polar = position::cartesian_to_polar_coords(&cartesian);
    let p = polar.as_slice();
    assert_relative_eq!(p[0][0], 1.0);
    assert_relative_eq!(p[0][1], FRAC_PI_2);
    assert_relative_eq!(p[0][2], FRAC_PI_2);
    assert_eq!(p[1], [0.0, 0.0, 0.0]);
}

#[test]
fn homogeneous_strip_is_identity() {
    let mut rng = StdRng::seed_from_u64(7);
    let coordinates = random::random_rot_vec::<f32, _, 1>(&mut rng, [10]);
    let homogeneous = position::make_coordinates_homogeneous(&coordinates);
    assert_eq!(position::strip_homogeneous_coordinates(&homogeneous), coordinates);
}

#[test]
fn invalid_conventions_are_rejected() {
    for s in ["xxy", "ab", "xyzx", ""] {
        assert_eq!(
            s.parse::<EulerConvention>(),
            Err(ConversionError::InvalidConvention(s.to_string()))
        );
    }
}

#[test]
fn flat_shape_mismatch_is_rejected() {
    let res = posekit::batch::vectors_from_shape_slice::<f64, 4, 1>(&[3, 3], &[0.0; 9]);
    assert!(matches!(res, Err(ConversionError::ShapeMismatch { .. })));

    let res = posekit::batch::matrices_from_shape_slice::<f64, 3, 3, 1>(&[2, 3, 4], &[0.0; 24]);
    assert!(matches!(res, Err(ConversionError::ShapeMismatch { .. })));
}

#[test]
fn flat_interop_roundtrip() -> Result<(), ConversionError> {
    let data = [0.1, 0.2, 0.3, -0.4, 0.0, 0.9];
    let rot_vec = posekit::batch::vectors_from_shape_slice::<f64, 3, 1>(&[2, 3], &data)?;
    let rot_mat = orientation::rot_vec_to_rot_mat(&rot_vec);

    let (shape, flat) = posekit::batch::matrices_to_flat(&rot_mat);
    assert_eq!(shape, vec![2, 3, 3]);
    assert_eq!(flat.len(), 18);

    let rot_mat = posekit::batch::matrices_from_shape_slice::<f64, 3, 3, 1>(&shape, &flat)?;
    let (shape, recovered) =
        posekit::batch::vectors_to_flat(&orientation::rot_mat_to_rot_vec(&rot_mat));
    assert_eq!(shape, vec![2, 3]);
    for (a, b) in recovered.iter().zip(data.iter()) {
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }
    Ok(())
}
