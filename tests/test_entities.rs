use lane_runner::entities::*;

#[test]
fn character_table_is_ordered_like_the_enum() {
    for (i, profile) in CHARACTERS.iter().enumerate() {
        assert_eq!(profile.id as usize, i);
        assert_eq!(profile.id.profile().key, profile.key);
        assert!(profile.sprite.ends_with(&format!("{}.png", profile.key)));
    }
}

#[test]
fn character_names_come_from_the_table() {
    assert_eq!(CharacterId::Princess.name(), "The princess");
    assert_eq!(CharacterId::Boy.name(), "The alien");
    assert_eq!(CharacterId::CatGirl.name(), "Kitty");
    assert_eq!(CharacterId::HornGirl.name(), "The viking");
    assert_eq!(CharacterId::PinkGirl.name(), "Barbie");
}

#[test]
fn character_lookup_by_key_and_slot() {
    assert_eq!(CharacterId::from_key("char-cat-girl"), Some(CharacterId::CatGirl));
    assert_eq!(CharacterId::from_key("char-dragon"), None);

    assert_eq!(CharacterId::from_menu_slot(1), Some(CharacterId::Princess));
    assert_eq!(CharacterId::from_menu_slot(5), Some(CharacterId::PinkGirl));
    assert_eq!(CharacterId::from_menu_slot(0), None);
    assert_eq!(CharacterId::from_menu_slot(6), None);
}

#[test]
fn gem_values_and_sprites() {
    assert_eq!(GemKind::Low.points(), 1);
    assert_eq!(GemKind::Mid.points(), 2);
    assert_eq!(GemKind::High.points(), 5);
    assert_eq!(Sprite::Gem(GemKind::High).path(), "images/Key-130.png");
    assert_eq!(Sprite::Enemy.path(), "images/enemy-bug.png");
    assert_eq!(
        Sprite::Character(CharacterId::Boy).path(),
        "images/char-boy.png"
    );
}

#[test]
fn default_player_waits_on_start_tile() {
    let p = Player::default();
    assert_eq!(p.pos, Position::new(202.0, 390.0));
    assert_eq!(p.status, PlayerStatus::NotStarted);
    assert_eq!(p.character, CharacterId::Princess);
    assert_eq!(p.level, 1);
    assert_eq!(p.lives, 3);
    assert_eq!(p.score, 0);
    assert_eq!(p.enemies_avoided, 0);
}
