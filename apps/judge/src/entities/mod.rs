pub mod battle_hands;
pub mod battle_messages;
pub mod battles;

pub use battle_hands::Entity as BattleHands;
pub use battle_hands::Model as BattleHand;
pub use battle_messages::Entity as BattleMessages;
pub use battle_messages::Model as BattleMessage;
pub use battles::Entity as Battles;
pub use battles::Model as Battle;
