//! Static decoration — ground, field patch, barn, trees, fences.
//!
//! All hand-placed low-poly primitives. Nothing here carries game state;
//! entities are spawned once on entering Playing and never touched again.

use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

fn matte(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        perceptual_roughness: 1.0,
        ..default()
    }
}

pub fn spawn_scenery(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_ground(&mut commands, &mut meshes, &mut materials);
    spawn_barn(&mut commands, &mut meshes, &mut materials, Vec3::new(-8.0, 0.0, -5.0));
    spawn_trees(&mut commands, &mut meshes, &mut materials);
    spawn_fences(&mut commands, &mut meshes, &mut materials);
}

// ─────────────────────────────────────────────────────────────────────────────
// Ground
// ─────────────────────────────────────────────────────────────────────────────

fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    // Lawn-green meadow.
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(50.0, 50.0))),
        MeshMaterial3d(materials.add(matte(Color::srgb(0.486, 0.988, 0.0)))),
        Transform::IDENTITY,
    ));

    // Tilled-earth patch under the wheat plots.
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(6.0, 6.0))),
        MeshMaterial3d(materials.add(matte(Color::srgb(0.545, 0.271, 0.075)))),
        Transform::from_xyz(3.0, 0.01, 3.0),
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Barn with silo
// ─────────────────────────────────────────────────────────────────────────────

fn spawn_barn(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) {
    let barn_red = materials.add(matte(Color::srgb(0.545, 0.271, 0.075)));
    let roof_brown = materials.add(matte(Color::srgb(0.361, 0.2, 0.09)));
    let door_brown = materials.add(matte(Color::srgb(0.239, 0.137, 0.078)));
    let window_glow = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.894, 0.71),
        emissive: (Color::srgb(1.0, 0.84, 0.0).to_linear()) * 0.3,
        ..default()
    });
    let silo_brown = materials.add(matte(Color::srgb(0.627, 0.322, 0.176)));

    let window_mesh = meshes.add(Cuboid::new(0.6, 0.6, 0.1));

    commands
        .spawn((Transform::from_translation(position), Visibility::default()))
        .with_children(|barn| {
            // Main body
            barn.spawn((
                Mesh3d(meshes.add(Cuboid::new(4.0, 3.0, 6.0))),
                MeshMaterial3d(barn_red.clone()),
                Transform::from_xyz(0.0, 1.5, 0.0),
            ));
            // Four-sided roof, rotated so a flat face points forward
            barn.spawn((
                Mesh3d(meshes.add(Cone { radius: 3.5, height: 2.0 }.mesh().resolution(4))),
                MeshMaterial3d(roof_brown.clone()),
                Transform::from_xyz(0.0, 4.5, 0.0)
                    .with_rotation(Quat::from_rotation_y(FRAC_PI_4)),
            ));
            // Door
            barn.spawn((
                Mesh3d(meshes.add(Cuboid::new(1.5, 2.0, 0.1))),
                MeshMaterial3d(door_brown),
                Transform::from_xyz(0.0, 1.0, 3.01),
            ));
            // Lit windows either side of the door
            for x in [-1.5, 1.5] {
                barn.spawn((
                    Mesh3d(window_mesh.clone()),
                    MeshMaterial3d(window_glow.clone()),
                    Transform::from_xyz(x, 2.0, 3.01),
                ));
            }
            // Silo
            barn.spawn((
                Mesh3d(meshes.add(Cylinder::new(1.0, 4.0).mesh().resolution(8))),
                MeshMaterial3d(silo_brown),
                Transform::from_xyz(3.5, 2.0, 0.0),
            ));
            barn.spawn((
                Mesh3d(meshes.add(Cone { radius: 1.2, height: 1.0 }.mesh().resolution(8))),
                MeshMaterial3d(roof_brown),
                Transform::from_xyz(3.5, 4.5, 0.0),
            ));
        });
}

// ─────────────────────────────────────────────────────────────────────────────
// Trees
// ─────────────────────────────────────────────────────────────────────────────

const TREES: [(Vec3, f32); 7] = [
    (Vec3::new(-12.0, 0.0, 8.0), 1.2),
    (Vec3::new(-10.0, 0.0, 10.0), 0.9),
    (Vec3::new(12.0, 0.0, -8.0), 1.1),
    (Vec3::new(10.0, 0.0, -10.0), 0.8),
    (Vec3::new(14.0, 0.0, 5.0), 1.3),
    (Vec3::new(-5.0, 0.0, 12.0), 1.0),
    (Vec3::new(8.0, 0.0, 12.0), 1.1),
];

fn spawn_trees(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let trunk_mesh = meshes.add(
        ConicalFrustum {
            radius_top: 0.2,
            radius_bottom: 0.3,
            height: 2.0,
        }
        .mesh()
        .resolution(6),
    );
    let trunk_material = materials.add(matte(Color::srgb(0.545, 0.271, 0.075)));

    // Three stacked foliage cones, darker at the base.
    let foliage: [(Handle<Mesh>, Handle<StandardMaterial>, f32); 3] = [
        (
            meshes.add(Cone { radius: 1.2, height: 2.0 }.mesh().resolution(6)),
            materials.add(matte(Color::srgb(0.133, 0.545, 0.133))),
            2.5,
        ),
        (
            meshes.add(Cone { radius: 0.9, height: 1.5 }.mesh().resolution(6)),
            materials.add(matte(Color::srgb(0.196, 0.804, 0.196))),
            3.5,
        ),
        (
            meshes.add(Cone { radius: 0.5, height: 1.0 }.mesh().resolution(6)),
            materials.add(matte(Color::srgb(0.235, 0.702, 0.443))),
            4.3,
        ),
    ];

    for (position, scale) in TREES {
        commands
            .spawn((
                Transform::from_translation(position).with_scale(Vec3::splat(scale)),
                Visibility::default(),
            ))
            .with_children(|tree| {
                tree.spawn((
                    Mesh3d(trunk_mesh.clone()),
                    MeshMaterial3d(trunk_material.clone()),
                    Transform::from_xyz(0.0, 1.0, 0.0),
                ));
                for (mesh, material, height) in &foliage {
                    tree.spawn((
                        Mesh3d(mesh.clone()),
                        MeshMaterial3d(material.clone()),
                        Transform::from_xyz(0.0, *height, 0.0),
                    ));
                }
            });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fences around the animal pens
// ─────────────────────────────────────────────────────────────────────────────

fn spawn_fences(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let post_mesh = meshes.add(Cuboid::new(0.1, 0.6, 0.1));
    let rail_mesh = meshes.add(Cuboid::new(0.9, 0.08, 0.05));
    let post_material = materials.add(matte(Color::srgb(0.545, 0.271, 0.075)));
    let rail_material = materials.add(matte(Color::srgb(0.627, 0.322, 0.176)));

    let mut segment = |position: Vec3, yaw: f32| {
        commands
            .spawn((
                Transform::from_translation(position).with_rotation(Quat::from_rotation_y(yaw)),
                Visibility::default(),
            ))
            .with_children(|fence| {
                for x in [-0.4, 0.4] {
                    fence.spawn((
                        Mesh3d(post_mesh.clone()),
                        MeshMaterial3d(post_material.clone()),
                        Transform::from_xyz(x, 0.3, 0.0),
                    ));
                }
                for y in [0.2, 0.45] {
                    fence.spawn((
                        Mesh3d(rail_mesh.clone()),
                        MeshMaterial3d(rail_material.clone()),
                        Transform::from_xyz(0.0, y, 0.0),
                    ));
                }
            });
    };

    // North run, then the two side runs framing the pens.
    for i in 0..8 {
        segment(Vec3::new(-6.0 + i as f32, 0.0, -12.0), 0.0);
    }
    for i in 0..6 {
        segment(Vec3::new(-6.0, 0.0, -12.0 + i as f32), FRAC_PI_2);
    }
    for i in 0..6 {
        segment(Vec3::new(2.0, 0.0, -12.0 + i as f32), FRAC_PI_2);
    }
}
