use crate::entity::{Player, Potion};

/// Apply every potion the player has reached this tick.
///
/// A potion triggers whenever `player.x >= potion.x`; only the X axis is
/// compared and potions are never used up, so a reached potion heals again on
/// every tick the condition keeps holding. Returns the total health gained.
pub fn apply_potions(player: &mut Player, potions: &[Potion]) -> u32 {
    let mut gained = 0u32;
    for potion in potions {
        if player.body.position.x >= potion.body.position.x {
            player.health = player.health.saturating_add(potion.healing_points);
            gained = gained.saturating_add(potion.healing_points);
            tracing::debug!(health = player.health, "picked up a potion");
        }
    }
    gained
}
