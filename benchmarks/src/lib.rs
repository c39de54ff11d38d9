//! Scene builders shared by the benchmarks.

use cubekeeper::ecs::components::physics::ColliderShape;
use cubekeeper::physics::{BodyDesc, PhysicsConfig, PhysicsWorld};
use cubekeeper::{RecordedScene, SimulationConfig, SimulationContext, Tap};
use glam::{Quat, Vec3};

pub fn ground() -> BodyDesc {
    BodyDesc::fixed(ColliderShape::Plane)
        .with_rotation(Quat::from_axis_angle(Vec3::X, -std::f32::consts::FRAC_PI_2))
}

pub fn cube(position: Vec3) -> BodyDesc {
    BodyDesc::dynamic(
        5.0,
        ColliderShape::Box {
            half_extents: Vec3::splat(0.05),
        },
    )
    .at(position)
}

/// `n` cubes on a grid resting on the ground, sleep disabled so every step
/// does the full amount of work.
pub fn setup_resting_world(n: usize) -> PhysicsWorld {
    let config = PhysicsConfig {
        allow_sleep: false,
        ..Default::default()
    };
    let mut world = PhysicsWorld::new(config);
    world.add_body(ground()).expect("ground");
    let side = (n as f32).sqrt().ceil() as usize;
    for i in 0..n {
        let x = (i % side) as f32 * 0.15;
        let z = (i / side) as f32 * 0.15;
        world.add_body(cube(Vec3::new(x, 0.05, z))).expect("cube");
    }
    world
}

/// `n` cubes stacked in columns of four and dropped onto the ground.
pub fn setup_falling_stacks(n: usize) -> PhysicsWorld {
    let mut world = PhysicsWorld::new(PhysicsConfig::default());
    world.add_body(ground()).expect("ground");
    for i in 0..n {
        let column = i / 4;
        let level = i % 4;
        let x = column as f32 * 0.3;
        world
            .add_body(cube(Vec3::new(x, 0.3 + level as f32 * 0.11, 0.0)))
            .expect("cube");
    }
    world
}

/// A full simulation with eight cubes, cube 2 knocked away and the robot on.
pub fn setup_simulation() -> (SimulationContext, RecordedScene) {
    let mut ctx = SimulationContext::new(SimulationConfig::default()).expect("context");
    for i in 0..8 {
        ctx.bind_cube(i, format!("cube{i}"), Vec3::new(i as f32 * 0.15 - 0.5, 0.05, 0.0))
            .expect("cube");
    }
    ctx.bind_agent("robot", Vec3::new(0.0, 0.1, -0.6)).expect("agent");
    let body = ctx.cubes().body(2).expect("cube2");
    ctx.world_mut()
        .set_position(body, Vec3::new(-0.1, 0.05, 0.4))
        .expect("displace");
    ctx.tap(Tap::Agent);
    (ctx, RecordedScene::new())
}
