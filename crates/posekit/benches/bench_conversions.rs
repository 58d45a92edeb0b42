use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use posekit::{orientation, pose, random, EulerConvention, Tensor};
use rand::{rngs::StdRng, SeedableRng};

const BATCH_SIZES: [usize; 3] = [1, 1_000, 100_000];

fn bench_orientation(c: &mut Criterion) {
    let mut group = c.benchmark_group("orientation");

    for batch_size in BATCH_SIZES {
        let mut rng = StdRng::seed_from_u64(0);
        let rot_vec = random::random_rot_vec::<f64, _, 1>(&mut rng, [batch_size]);
        let rot_mat = orientation::rot_vec_to_rot_mat(&rot_vec);
        let quaternion = orientation::rot_vec_to_quaternion(&rot_vec);

        group.throughput(Throughput::Elements(batch_size as u64));

        group.bench_with_input(
            BenchmarkId::new("rot_vec_to_rot_mat", batch_size),
            &rot_vec,
            |b, rot_vec| b.iter(|| orientation::rot_vec_to_rot_mat(black_box(rot_vec))),
        );

        group.bench_with_input(
            BenchmarkId::new("rot_mat_to_rot_vec", batch_size),
            &rot_mat,
            |b, rot_mat| b.iter(|| orientation::rot_mat_to_rot_vec(black_box(rot_mat))),
        );

        group.bench_with_input(
            BenchmarkId::new("rot_mat_to_euler", batch_size),
            &rot_mat,
            |b, rot_mat| {
                b.iter(|| orientation::rot_mat_to_euler(black_box(rot_mat), EulerConvention::Zyx))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("quaternion_to_axis_angle", batch_size),
            &quaternion,
            |b, quaternion| b.iter(|| orientation::quaternion_to_axis_angle(black_box(quaternion))),
        );
    }

    group.finish();
}

fn bench_increment(c: &mut Criterion) {
    let mut group = c.benchmark_group("increment_quaternion_pose_with_velocity");

    for batch_size in BATCH_SIZES {
        let mut rng = StdRng::seed_from_u64(1);
        let quaternion = random::random_quaternion::<f64, _, 1>(&mut rng, [batch_size]);
        let poses = Tensor::from_shape_fn([batch_size], |[i]| {
            let q = quaternion.as_slice()[i];
            [0.0, 0.0, 0.0, q[0], q[1], q[2], q[3]]
        });
        let velocity = Tensor::<[f64; 7], 1>::from_shape_val(
            [1],
            [1.0, 0.0, 0.0, 0.0, 0.0, 0.5f64.sin(), 0.5f64.cos()],
        );

        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &poses,
            |b, poses| {
                b.iter(|| {
                    pose::increment_quaternion_pose_with_velocity(
                        black_box(poses),
                        black_box(&velocity),
                        0.01,
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_orientation, bench_increment);
criterion_main!(benches);
