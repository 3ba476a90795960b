use bevy::prelude::*;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// SEED SHOP — a single always-visible buy button, top-right
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct ShopPanel;

#[derive(Component)]
pub struct BuyButton;

const BUTTON_IDLE: Color = Color::srgb(0.18, 0.45, 0.2);
const BUTTON_HOVER: Color = Color::srgb(0.24, 0.58, 0.26);
const BUTTON_PRESSED: Color = Color::srgb(0.12, 0.32, 0.14);
const BUTTON_DISABLED: Color = Color::srgb(0.3, 0.3, 0.3);

pub fn spawn_shop_panel(mut commands: Commands, rules: Res<FarmRules>) {
    commands
        .spawn((
            ShopPanel,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                right: Val::Px(12.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                padding: UiRect::all(Val::Px(12.0)),
                border: UiRect::all(Val::Px(1.0)),
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            BorderColor(Color::srgba(0.5, 0.5, 0.5, 0.5)),
            PickingBehavior::IGNORE,
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("Seed Shop"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.84, 0.0)),
                PickingBehavior::IGNORE,
            ));
            panel
                .spawn((
                    BuyButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(BUTTON_IDLE),
                    BorderColor(Color::srgba(1.0, 1.0, 1.0, 0.3)),
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new(format!(
                            "Buy {} Seeds ({} Wheat)",
                            rules.seed_batch, rules.seed_price
                        )),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                        PickingBehavior::IGNORE,
                    ));
                });
        });
}

/// Fires the purchase intent on press. The farm reducer decides whether the
/// trade actually goes through; the button itself never touches counters.
pub fn handle_buy_button(
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<BuyButton>),
    >,
    farm: Res<FarmState>,
    rules: Res<FarmRules>,
    mut buy_events: EventWriter<BuySeedsEvent>,
) {
    let affordable = farm.wheat >= rules.seed_price;
    for (interaction, mut bg) in &mut interaction_query {
        match *interaction {
            Interaction::Pressed => {
                *bg = BackgroundColor(BUTTON_PRESSED);
                buy_events.send(BuySeedsEvent);
            }
            Interaction::Hovered => {
                *bg = BackgroundColor(if affordable { BUTTON_HOVER } else { BUTTON_DISABLED });
            }
            Interaction::None => {
                *bg = BackgroundColor(if affordable { BUTTON_IDLE } else { BUTTON_DISABLED });
            }
        }
    }
}

/// Grays the button out whenever wheat drops below the price, so the player
/// can see at a glance that the trade would be refused.
pub fn refresh_buy_affordability(
    farm: Res<FarmState>,
    rules: Res<FarmRules>,
    mut button_query: Query<(&Interaction, &mut BackgroundColor), With<BuyButton>>,
) {
    if !farm.is_changed() {
        return;
    }
    let affordable = farm.wheat >= rules.seed_price;
    for (interaction, mut bg) in &mut button_query {
        if *interaction == Interaction::None {
            *bg = BackgroundColor(if affordable { BUTTON_IDLE } else { BUTTON_DISABLED });
        }
    }
}
