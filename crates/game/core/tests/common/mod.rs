use combat_core::{
    Ability, AbilityType, ClassKind, Combatant, CombatantKind, Damage, EnemyProfile, Pool,
    ResourceKind, ResourcePools, Row, StatBlock, StatWeights, Weapon, WeaponType,
};

/// Long sword with STR 0.7 scaling and 16 base damage.
pub fn long_sword() -> Weapon {
    Weapon {
        name: "Long Sword".into(),
        weapon_type: WeaponType::LongSword,
        base_damage: 16,
        stat_weights: StatWeights::strength(0.7),
        proficient: vec![ClassKind::Fighter, ClassKind::Knight],
        ..Weapon::unarmed()
    }
}

pub fn fighter() -> Combatant {
    Combatant::builder("Brannoc", CombatantKind::Player)
        .class(ClassKind::Fighter)
        .level(3)
        .stats(StatBlock::new(14, 10, 14, 8, 9, 8))
        .max_hp(42)
        .pools(ResourcePools::new().with(ResourceKind::StrSp, Pool::full(20)))
        .weapon(long_sword())
        .build()
}

pub fn mage() -> Combatant {
    Combatant::builder("Ysolde", CombatantKind::Player)
        .class(ClassKind::Mage)
        .level(3)
        .stats(StatBlock::new(7, 11, 9, 16, 12, 10))
        .max_hp(22)
        .row(Row::Back)
        .pools(ResourcePools::new().with(ResourceKind::IntMp, Pool::new(8, 20)))
        .ability(Ability::new("Fireball", AbilityType::Spell).with_cost(10, ResourceKind::IntMp))
        .build()
}

pub fn goblin(name: &str, row: Row, max_hp: i32) -> Combatant {
    Combatant::builder(name, CombatantKind::Enemy)
        .stats(StatBlock::new(8, 10, 8, 4, 4, 4))
        .defense(5)
        .max_hp(max_hp)
        .row(row)
        .enemy_profile(EnemyProfile {
            attack_damage: Damage::Range(3, 6),
            xp_reward: 10,
            gold_reward: (1, 6),
            ..EnemyProfile::default()
        })
        .build()
}
