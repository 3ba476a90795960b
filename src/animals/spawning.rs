//! Builds the animal flock out of low-poly primitives.
//!
//! Each animal is a parent entity carrying its animation component; the
//! body parts are plain child meshes. Phase and speed get a little rng
//! jitter so the flock doesn't move in unison.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::{Animal, AnimalKind, IdleBob, Shuttle};

const COWS: [Vec3; 2] = [Vec3::new(-4.0, 0.0, -8.0), Vec3::new(-2.0, 0.0, -10.0)];
const CHICKENS: [Vec3; 3] = [
    Vec3::new(-6.0, 0.0, 2.0),
    Vec3::new(-7.0, 0.0, 3.0),
    Vec3::new(-5.5, 0.0, 3.5),
];
const PIGS: [Vec3; 2] = [Vec3::new(8.0, 0.0, -3.0), Vec3::new(10.0, 0.0, -2.0)];

fn matte(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        perceptual_roughness: 1.0,
        ..default()
    }
}

pub fn spawn_animals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::thread_rng();
    spawn_cows(&mut commands, &mut meshes, &mut materials, &mut rng);
    spawn_chickens(&mut commands, &mut meshes, &mut materials, &mut rng);
    spawn_pigs(&mut commands, &mut meshes, &mut materials, &mut rng);
    info!(
        "[Animals] Spawned {} cow(s), {} chicken(s), {} pig(s)",
        COWS.len(),
        CHICKENS.len(),
        PIGS.len()
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Cows — stationary, gentle bob and sway
// ─────────────────────────────────────────────────────────────────────────────

fn spawn_cows(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    rng: &mut impl Rng,
) {
    let white = materials.add(matte(Color::srgb(0.961, 0.961, 0.961)));
    let spot_dark = materials.add(matte(Color::srgb(0.184, 0.184, 0.184)));
    let pink = materials.add(matte(Color::srgb(1.0, 0.714, 0.757)));

    let body = meshes.add(Cuboid::new(1.2, 0.8, 0.7));
    let head = meshes.add(Cuboid::new(0.4, 0.4, 0.5));
    let snout = meshes.add(Cuboid::new(0.15, 0.2, 0.35));
    let leg = meshes.add(Cuboid::new(0.15, 0.4, 0.15));
    let ear = meshes.add(Cuboid::new(0.1, 0.15, 0.08));
    let spot_big = meshes.add(Sphere::new(0.15).mesh().uv(6, 6));
    let spot_small = meshes.add(Sphere::new(0.12).mesh().uv(6, 6));

    for home in COWS {
        commands
            .spawn((
                Animal { kind: AnimalKind::Cow },
                IdleBob {
                    home,
                    amplitude: 0.05,
                    speed: 2.0 * rng.gen_range(0.9..1.1),
                    sway: 0.1,
                    phase: rng.gen_range(0.0..TAU),
                },
                Transform::from_translation(home),
                Visibility::default(),
            ))
            .with_children(|cow| {
                cow.spawn((
                    Mesh3d(body.clone()),
                    MeshMaterial3d(white.clone()),
                    Transform::from_xyz(0.0, 0.6, 0.0),
                ));
                cow.spawn((
                    Mesh3d(spot_big.clone()),
                    MeshMaterial3d(spot_dark.clone()),
                    Transform::from_xyz(0.3, 0.7, 0.36),
                ));
                cow.spawn((
                    Mesh3d(spot_small.clone()),
                    MeshMaterial3d(spot_dark.clone()),
                    Transform::from_xyz(-0.2, 0.5, 0.36),
                ));
                cow.spawn((
                    Mesh3d(head.clone()),
                    MeshMaterial3d(white.clone()),
                    Transform::from_xyz(0.7, 0.7, 0.0),
                ));
                cow.spawn((
                    Mesh3d(snout.clone()),
                    MeshMaterial3d(pink.clone()),
                    Transform::from_xyz(0.95, 0.6, 0.0),
                ));
                for (x, z) in [(-0.35, 0.2), (-0.35, -0.2), (0.35, 0.2), (0.35, -0.2)] {
                    cow.spawn((
                        Mesh3d(leg.clone()),
                        MeshMaterial3d(white.clone()),
                        Transform::from_xyz(x, 0.2, z),
                    ));
                }
                for (z, tilt) in [(0.2, 0.3), (-0.2, -0.3)] {
                    cow.spawn((
                        Mesh3d(ear.clone()),
                        MeshMaterial3d(pink.clone()),
                        Transform::from_xyz(0.75, 0.95, z)
                            .with_rotation(Quat::from_rotation_z(tilt)),
                    ));
                }
            });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chickens — quick little struts along x
// ─────────────────────────────────────────────────────────────────────────────

fn spawn_chickens(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    rng: &mut impl Rng,
) {
    let wheat = materials.add(matte(Color::srgb(0.961, 0.871, 0.702)));
    let orange = materials.add(matte(Color::srgb(1.0, 0.647, 0.0)));
    let red = materials.add(matte(Color::srgb(1.0, 0.271, 0.0)));
    let brown = materials.add(matte(Color::srgb(0.545, 0.271, 0.075)));

    let body = meshes.add(Sphere::new(0.25).mesh().uv(8, 8));
    let head = meshes.add(Sphere::new(0.12).mesh().uv(8, 8));
    let beak = meshes.add(Cone { radius: 0.04, height: 0.1 }.mesh().resolution(4));
    let comb = meshes.add(Cuboid::new(0.08, 0.08, 0.03));
    let tail = meshes.add(Cone { radius: 0.08, height: 0.2 }.mesh().resolution(4));
    let leg = meshes.add(Cylinder::new(0.02, 0.1).mesh().resolution(4));

    for home in CHICKENS {
        commands
            .spawn((
                Animal { kind: AnimalKind::Chicken },
                Shuttle {
                    home,
                    axis: Vec3::X,
                    amplitude: 0.3,
                    speed: 3.0 * rng.gen_range(0.9..1.1),
                    phase: rng.gen_range(0.0..TAU),
                    yaw_forward: 0.0,
                    yaw_back: PI,
                },
                Transform::from_translation(home),
                Visibility::default(),
            ))
            .with_children(|chicken| {
                chicken.spawn((
                    Mesh3d(body.clone()),
                    MeshMaterial3d(wheat.clone()),
                    Transform::from_xyz(0.0, 0.25, 0.0),
                ));
                chicken.spawn((
                    Mesh3d(head.clone()),
                    MeshMaterial3d(wheat.clone()),
                    Transform::from_xyz(0.2, 0.45, 0.0),
                ));
                chicken.spawn((
                    Mesh3d(beak.clone()),
                    MeshMaterial3d(orange.clone()),
                    Transform::from_xyz(0.35, 0.42, 0.0)
                        .with_rotation(Quat::from_rotation_z(-0.3)),
                ));
                chicken.spawn((
                    Mesh3d(comb.clone()),
                    MeshMaterial3d(red.clone()),
                    Transform::from_xyz(0.2, 0.58, 0.0),
                ));
                chicken.spawn((
                    Mesh3d(tail.clone()),
                    MeshMaterial3d(brown.clone()),
                    Transform::from_xyz(-0.25, 0.35, 0.0)
                        .with_rotation(Quat::from_rotation_z(0.5)),
                ));
                for z in [0.05, -0.05] {
                    chicken.spawn((
                        Mesh3d(leg.clone()),
                        MeshMaterial3d(orange.clone()),
                        Transform::from_xyz(0.05, 0.05, z),
                    ));
                }
            });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pigs — longer amble along z
// ─────────────────────────────────────────────────────────────────────────────

fn spawn_pigs(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    rng: &mut impl Rng,
) {
    let pig_pink = materials.add(matte(Color::srgb(1.0, 0.753, 0.796)));
    let hot_pink = materials.add(matte(Color::srgb(1.0, 0.412, 0.706)));

    let body = meshes.add(Cuboid::new(0.8, 0.5, 0.5));
    let head = meshes.add(Cuboid::new(0.35, 0.35, 0.4));
    let snout = meshes.add(Cylinder::new(0.1, 0.1).mesh().resolution(8));
    let ear = meshes.add(Cuboid::new(0.1, 0.15, 0.05));
    let leg = meshes.add(Cuboid::new(0.1, 0.25, 0.1));
    let tail = meshes.add(Torus { minor_radius: 0.02, major_radius: 0.06 }.mesh());

    for home in PIGS {
        commands
            .spawn((
                Animal { kind: AnimalKind::Pig },
                Shuttle {
                    home,
                    axis: Vec3::Z,
                    amplitude: 0.5,
                    speed: 1.5 * rng.gen_range(0.9..1.1),
                    phase: rng.gen_range(0.0..TAU),
                    yaw_forward: -FRAC_PI_2,
                    yaw_back: FRAC_PI_2,
                },
                Transform::from_translation(home),
                Visibility::default(),
            ))
            .with_children(|pig| {
                pig.spawn((
                    Mesh3d(body.clone()),
                    MeshMaterial3d(pig_pink.clone()),
                    Transform::from_xyz(0.0, 0.4, 0.0),
                ));
                pig.spawn((
                    Mesh3d(head.clone()),
                    MeshMaterial3d(pig_pink.clone()),
                    Transform::from_xyz(0.5, 0.45, 0.0),
                ));
                pig.spawn((
                    Mesh3d(snout.clone()),
                    MeshMaterial3d(hot_pink.clone()),
                    Transform::from_xyz(0.7, 0.4, 0.0)
                        .with_rotation(Quat::from_rotation_z(FRAC_PI_2)),
                ));
                for (z, tilt) in [(0.12, 0.3), (-0.12, -0.3)] {
                    pig.spawn((
                        Mesh3d(ear.clone()),
                        MeshMaterial3d(hot_pink.clone()),
                        Transform::from_xyz(0.45, 0.65, z)
                            .with_rotation(Quat::from_rotation_x(tilt)),
                    ));
                }
                for (x, z) in [(-0.25, 0.15), (-0.25, -0.15), (0.2, 0.15), (0.2, -0.15)] {
                    pig.spawn((
                        Mesh3d(leg.clone()),
                        MeshMaterial3d(pig_pink.clone()),
                        Transform::from_xyz(x, 0.12, z),
                    ));
                }
                pig.spawn((
                    Mesh3d(tail.clone()),
                    MeshMaterial3d(hot_pink.clone()),
                    Transform::from_xyz(-0.45, 0.5, 0.0)
                        .with_rotation(Quat::from_rotation_z(0.5)),
                ));
            });
    }
}
