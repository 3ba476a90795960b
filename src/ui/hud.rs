use bevy::prelude::*;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS — used to query and update HUD elements
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct HudWheatText;

#[derive(Component)]
pub struct HudSeedsText;

/// Marker for the hint container node (top-center of screen).
#[derive(Component)]
pub struct HintContainer;

/// Marker for individual hint nodes.
#[derive(Component)]
pub struct HintItem {
    pub timer: Timer,
    pub fade_timer: Option<Timer>,
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWN HUD
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_hud(mut commands: Commands, rules: Res<FarmRules>) {
    // ─── STATS PANEL — absolute position, top-left ───
    commands
        .spawn((
            HudRoot,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(12.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                padding: UiRect::all(Val::Px(12.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            BorderColor(Color::srgba(0.5, 0.5, 0.5, 0.5)),
            PickingBehavior::IGNORE,
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("Farm Stats"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.84, 0.0)),
                PickingBehavior::IGNORE,
            ));
            panel.spawn((
                HudWheatText,
                Text::new(format!("Wheat: {}", rules.starting_wheat)),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.855, 0.647, 0.125)),
                PickingBehavior::IGNORE,
            ));
            panel.spawn((
                HudSeedsText,
                Text::new(format!("Seeds: {}", rules.starting_seeds)),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.565, 0.933, 0.565)),
                PickingBehavior::IGNORE,
            ));
        });

    // ─── INSTRUCTIONS — absolute position, bottom-right ───
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(12.0),
                right: Val::Px(12.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(2.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.45)),
            PickingBehavior::IGNORE,
        ))
        .with_children(|panel| {
            for line in [
                "Click an empty plot to plant",
                "Click golden wheat to harvest",
                "Drag to orbit, scroll to zoom",
            ] {
                panel.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 13.0,
                        ..default()
                    },
                    TextColor(Color::srgba(1.0, 1.0, 1.0, 0.85)),
                    PickingBehavior::IGNORE,
                ));
            }
        });

    // ─── HINT COLUMN — top-center, populated by HintEvent ───
    commands.spawn((
        HintContainer,
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(60.0),
            left: Val::Percent(50.0),
            width: Val::Px(320.0),
            // Shift left by half of the width to truly center it.
            margin: UiRect {
                left: Val::Px(-160.0),
                ..default()
            },
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            align_items: AlignItems::Center,
            ..default()
        },
        PickingBehavior::IGNORE,
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// STATS DATA BINDING
// ═══════════════════════════════════════════════════════════════════════

pub fn update_stats_text(
    farm: Res<FarmState>,
    mut wheat_query: Query<&mut Text, (With<HudWheatText>, Without<HudSeedsText>)>,
    mut seeds_query: Query<&mut Text, (With<HudSeedsText>, Without<HudWheatText>)>,
) {
    if !farm.is_changed() {
        return;
    }
    for mut text in &mut wheat_query {
        **text = format!("Wheat: {}", farm.wheat);
    }
    for mut text in &mut seeds_query {
        **text = format!("Seeds: {}", farm.seeds);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// HINTS — spawn a child node per event, hold, fade, despawn
// ═══════════════════════════════════════════════════════════════════════

const HINT_HOLD_SECS: f32 = 2.0;
const HINT_FADE_SECS: f32 = 0.5;

pub fn handle_hint_events(
    mut commands: Commands,
    mut events: EventReader<HintEvent>,
    container_query: Query<Entity, With<HintContainer>>,
    existing_hints: Query<Entity, With<HintItem>>,
) {
    let Ok(container) = container_query.get_single() else {
        return;
    };

    for event in events.read() {
        // Enforce max 3 visible hints: despawn oldest if over limit.
        let hint_entities: Vec<Entity> = existing_hints.iter().collect();
        if hint_entities.len() >= 3 {
            if let Some(&oldest) = hint_entities.first() {
                commands.entity(oldest).despawn_recursive();
            }
        }

        let hint_entity = commands
            .spawn((
                HintItem {
                    timer: Timer::from_seconds(HINT_HOLD_SECS, TimerMode::Once),
                    fade_timer: None,
                },
                Node {
                    padding: UiRect {
                        left: Val::Px(12.0),
                        right: Val::Px(12.0),
                        top: Val::Px(5.0),
                        bottom: Val::Px(5.0),
                    },
                    border: UiRect::all(Val::Px(1.0)),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.75)),
                BorderColor(Color::srgba(0.5, 0.5, 0.5, 0.5)),
                PickingBehavior::IGNORE,
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(event.message.clone()),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    PickingBehavior::IGNORE,
                ));
            })
            .id();

        commands.entity(container).add_child(hint_entity);
    }
}

pub fn update_hints(
    mut commands: Commands,
    time: Res<Time>,
    mut hint_query: Query<(Entity, &mut HintItem, &mut BackgroundColor, &Children)>,
    mut text_color_query: Query<&mut TextColor>,
) {
    for (entity, mut hint, mut bg_color, children) in &mut hint_query {
        if hint.fade_timer.is_none() {
            hint.timer.tick(time.delta());
            if hint.timer.just_finished() {
                hint.fade_timer = Some(Timer::from_seconds(HINT_FADE_SECS, TimerMode::Once));
            }
            continue;
        }

        let finished = {
            let ft = hint.fade_timer.as_mut().expect("fade timer set above");
            ft.tick(time.delta());
            ft.finished()
        };

        if finished {
            commands.entity(entity).despawn_recursive();
            continue;
        }

        let alpha = hint
            .fade_timer
            .as_ref()
            .map(|ft| ft.fraction_remaining())
            .unwrap_or(0.0);
        bg_color.0 = Color::srgba(0.0, 0.0, 0.0, 0.75 * alpha);
        for &child in children.iter() {
            if let Ok(mut text_color) = text_color_query.get_mut(child) {
                text_color.0 = Color::srgba(1.0, 1.0, 1.0, alpha);
            }
        }
    }
}
