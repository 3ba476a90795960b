//! Plot visuals — soil slabs and wheat stalks that track growth state.
//!
//! Pure consumer of `FarmState`: spawned once on entering Playing, then
//! synced from change detection in PostUpdate. Nothing here mutates state.

use bevy::prelude::*;

use crate::shared::*;
use super::{stage_color, stage_height, FarmEntities};

/// Marker for a plot's soil slab.
#[derive(Component, Debug, Clone)]
pub struct SoilSlab {
    pub plot_id: u32,
}

/// Marker for a plot's stalk mesh. Hidden while the plot is bare.
#[derive(Component, Debug, Clone)]
pub struct WheatStalk {
    pub plot_id: u32,
}

/// Marker for the golden head shown only at the final stage.
#[derive(Component, Debug, Clone)]
pub struct WheatHead {
    pub plot_id: u32,
}

/// Mesh and material handles shared by every plot, created once.
#[derive(Resource)]
pub struct PlotAssets {
    pub stage_materials: [Handle<StandardMaterial>; 4],
}

// ─────────────────────────────────────────────────────────────────────────────
// Spawn
// ─────────────────────────────────────────────────────────────────────────────

pub fn spawn_plot_entities(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut entities: ResMut<FarmEntities>,
    farm: Res<FarmState>,
    rules: Res<FarmRules>,
) {
    let slab = rules.plot_spacing * 0.9;
    let soil_mesh = meshes.add(Cuboid::new(slab, 0.05, slab));
    let stalk_mesh = meshes.add(Cylinder::new(0.14, 1.0).mesh().resolution(6));
    let head_mesh = meshes.add(Sphere::new(0.09).mesh().uv(6, 6));

    let soil_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.396, 0.263, 0.129),
        perceptual_roughness: 1.0,
        ..default()
    });
    let stage_materials = [0u8, 1, 2, 3].map(|stage| {
        materials.add(StandardMaterial {
            base_color: stage_color(stage),
            perceptual_roughness: 0.9,
            ..default()
        })
    });
    let head_material = stage_materials[MAX_GROWTH_STAGE as usize].clone();

    for plot in &farm.plots {
        let soil = commands
            .spawn((
                SoilSlab { plot_id: plot.id },
                Mesh3d(soil_mesh.clone()),
                MeshMaterial3d(soil_material.clone()),
                Transform::from_translation(plot.position.with_y(0.025)),
            ))
            .id();

        let stalk = commands
            .spawn((
                WheatStalk { plot_id: plot.id },
                Mesh3d(stalk_mesh.clone()),
                MeshMaterial3d(stage_materials[0].clone()),
                stalk_transform(plot.position, plot.growth_stage),
                Visibility::Hidden,
            ))
            .id();

        let head = commands
            .spawn((
                WheatHead { plot_id: plot.id },
                Mesh3d(head_mesh.clone()),
                MeshMaterial3d(head_material.clone()),
                Transform::from_translation(
                    plot.position
                        .with_y(stage_height(MAX_GROWTH_STAGE) + 0.15),
                ),
                Visibility::Hidden,
            ))
            .id();

        entities.soil.insert(plot.id, soil);
        entities.stalks.insert(plot.id, stalk);
        entities.heads.insert(plot.id, head);
    }

    commands.insert_resource(PlotAssets { stage_materials });

    info!("[Farm] Spawned {} plot(s)", farm.plots.len());
}

/// Stalk base mesh is a unit-height cylinder; scale and lift it so the
/// stalk sits on the soil at the stage's height.
fn stalk_transform(position: Vec3, stage: u8) -> Transform {
    let height = stage_height(stage);
    Transform {
        translation: Vec3::new(position.x, height * 0.5 + 0.05, position.z),
        scale: Vec3::new(1.0, height, 1.0),
        ..default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sync
// ─────────────────────────────────────────────────────────────────────────────

/// Re-reads `FarmState` whenever it changed and updates every plot's stalk
/// height, colour, and head visibility.
pub fn sync_plot_visuals(
    farm: Res<FarmState>,
    entities: Res<FarmEntities>,
    assets: Option<Res<PlotAssets>>,
    mut stalks: Query<
        (
            &mut Transform,
            &mut MeshMaterial3d<StandardMaterial>,
            &mut Visibility,
        ),
        With<WheatStalk>,
    >,
    mut heads: Query<&mut Visibility, (With<WheatHead>, Without<WheatStalk>)>,
) {
    if !farm.is_changed() {
        return;
    }
    let Some(assets) = assets else {
        return;
    };

    for plot in &farm.plots {
        if let Some(&entity) = entities.stalks.get(&plot.id) {
            if let Ok((mut transform, mut material, mut visibility)) = stalks.get_mut(entity) {
                *visibility = if plot.planted && plot.growth_stage > 0 {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                };
                *transform = stalk_transform(plot.position, plot.growth_stage);
                let wanted = &assets.stage_materials[plot.growth_stage as usize];
                if material.0 != *wanted {
                    material.0 = wanted.clone();
                }
            }
        }

        if let Some(&entity) = entities.heads.get(&plot.id) {
            if let Ok(mut visibility) = heads.get_mut(entity) {
                *visibility = if plot.is_ready() {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                };
            }
        }
    }
}
