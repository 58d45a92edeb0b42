use argh::FromArgs;
use rand::{rngs::StdRng, Rng, SeedableRng};

use posekit::{orientation, pose, position, random, EulerConvention, Tensor};

/// Walk a batch through every rotation, pose and coordinate representation
#[derive(Debug, FromArgs)]
struct Args {
    /// seed of the random batch
    #[argh(option, short = 's', default = "42")]
    seed: u64,

    /// number of rotations in the batch
    #[argh(option, short = 'n', default = "4")]
    batch_size: usize,

    /// euler convention, e.g. zyx
    #[argh(option, short = 'c', default = "EulerConvention::Zyx", from_str_fn(to_convention))]
    convention: EulerConvention,
}

fn to_convention(value: &str) -> Result<EulerConvention, String> {
    value.parse().map_err(|err: posekit::ConversionError| err.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut rng = StdRng::seed_from_u64(args.seed);

    // orientation

    let rot_vec = random::random_rot_vec::<f64, _, 1>(&mut rng, [args.batch_size]);
    let rot_mat = orientation::rot_vec_to_rot_mat(&rot_vec);
    let euler = orientation::rot_mat_to_euler(&rot_mat, args.convention);
    let quaternion = orientation::euler_to_quaternion(&euler, args.convention);
    let axis_angle = orientation::quaternion_to_axis_angle(&quaternion);
    let rot_vec_again = orientation::axis_angle_to_rot_vec(&axis_angle);

    let max_error = max_abs_diff(rot_vec.iter().flatten(), rot_vec_again.iter().flatten());
    log::info!(
        "orientation: rot_vec -> rot_mat -> euler ({}) -> quaternion -> axis_angle -> rot_vec, max error {max_error:e}",
        args.convention
    );

    // pose

    let rot_vec_pose = Tensor::from_shape_fn([args.batch_size], |[i]| {
        let [x, y, z] = rot_vec.as_slice()[i];
        [1.0, 1.0, 1.0, x, y, z]
    });
    let mat_pose = pose::rot_vec_pose_to_mat_pose(&rot_vec_pose);
    let euler_pose = pose::mat_pose_to_euler_pose(&mat_pose, args.convention);
    let quaternion_pose = pose::euler_pose_to_quaternion_pose(&euler_pose, args.convention);
    let rot_vec_pose_again = pose::quaternion_pose_to_rot_vec_pose(&quaternion_pose);

    let max_error = max_abs_diff(
        rot_vec_pose.iter().flatten(),
        rot_vec_pose_again.iter().flatten(),
    );
    log::info!("pose: rot_vec_pose -> mat_pose -> euler_pose -> quaternion_pose -> rot_vec_pose, max error {max_error:e}");

    let velocity = Tensor::<[f64; 7], 1>::from_shape_val(
        [1],
        [0.1, 0.0, 0.0, 0.0, 0.0, 0.5f64.sin(), 0.5f64.cos()],
    );
    let next_pose = pose::increment_quaternion_pose_with_velocity(&quaternion_pose, &velocity, 0.1)?;
    log::info!("pose: integrated velocity over 0.1s, first pose {:?}", next_pose.as_slice().first());

    // position

    let cartesian = Tensor::from_shape_fn([args.batch_size], |_| {
        [rng.random::<f64>(), rng.random(), rng.random()]
    });
    let polar = position::cartesian_to_polar_coords(&cartesian);
    let cartesian_again = position::polar_to_cartesian_coords(&polar);

    let max_error = max_abs_diff(cartesian.iter().flatten(), cartesian_again.iter().flatten());
    log::info!("position: cartesian -> polar -> cartesian, max error {max_error:e}");

    // frame of reference transformations

    let trans_mat = Tensor::<[[f64; 4]; 3], 1>::from_shape_fn([1], |_| {
        std::array::from_fn(|_| std::array::from_fn(|_| rng.random_range(0.0..1.0)))
    });
    let transformed = position::transform_coordinates(&trans_mat, &cartesian)?;
    let inv_trans_mat = position::invert_transformation(&trans_mat)?;
    let cartesian_again = position::transform_coordinates(&inv_trans_mat, &transformed)?;

    let max_error = max_abs_diff(cartesian.iter().flatten(), cartesian_again.iter().flatten());
    log::info!("position: transform -> inverse transform, max error {max_error:e}");

    println!("End of run through demo!");

    Ok(())
}

fn max_abs_diff<'a>(
    a: impl Iterator<Item = &'a f64>,
    b: impl Iterator<Item = &'a f64>,
) -> f64 {
    a.zip(b).map(|(x, y)| (x - y).abs()).fold(0.0, f64::max)
}
