//! Rule data for every form.

use super::definition::FormDefinition;
use super::variant::FormVariant;
use super::{
    AttackVerbs, Brand, Colour, DurationScaling, DurationSpec, EquipSlots, FormId,
    MonsterKind, ResistFlags, SizeCategory,
};

use super::Capability::{Default as Keep, Enable, Forbid};

const SPORES: &str = "release spores at";

/// Builds the definition for `id`.
pub(super) fn definition(id: FormId) -> FormDefinition {
    let builder = FormDefinition::builder(id);
    match id {
        FormId::None => builder
            .variant(FormVariant::Unchanged)
            .names("", "", "none")
            .build(),

        FormId::Spider => builder
            .names("Spider", "spider-form", "spider")
            .description("a venomous arachnid creature")
            .blocks(EquipSlots::PHYSICAL)
            .size(SizeCategory::Tiny)
            .stat_mods(0, 5)
            .stealth_mod(21)
            .resists(ResistFlags::poison(1))
            .ac(2, 0, 0)
            .unarmed(10, 5)
            .attack(Brand::Venom, Colour::LightGreen, "Fangs", AttackVerbs::ANIMAL)
            .capabilities(Keep, Forbid, Enable)
            .physiology(true, false)
            .shout("hiss", -4)
            .body_parts("front leg", "leg")
            .duration(DurationSpec::new(10, DurationScaling::Single, 60))
            .equivalent_mons(MonsterKind::Spider)
            .build(),

        FormId::BladeHands => builder
            .variant(FormVariant::BladeHands)
            .names("Blade", "blade hands", "blade_hands")
            .blocks(EquipSlots::HANDS)
            .casting(true, 20)
            .unarmed(12, 22)
            .attack(
                Brand::Normal,
                Colour::Red,
                "",
                AttackVerbs::new("hit", "slash", "slice", "shred"),
            )
            .duration(DurationSpec::new(10, DurationScaling::Single, 100))
            .build(),

        FormId::Statue => builder
            .names("Statue", "statue-form", "statue")
            .description("a living statue of rough stone")
            .untransform_message("You revert to your normal fleshy form.")
            .blocks(EquipSlots::STATUE)
            .stat_mods(2, -2)
            .hp_mod(13)
            .resists(ResistFlags::RES_ELEC | ResistFlags::negative(1) | ResistFlags::RES_ROT)
            .ac(12, 10, 0)
            .casting(true, 30)
            .unarmed(9, 12)
            .attack(
                Brand::Normal,
                Colour::LightGrey,
                "",
                AttackVerbs::new("hit", "punch", "pummel", "batter"),
            )
            .capabilities(Keep, Forbid, Forbid)
            .physiology(false, true)
            .duration(DurationSpec::new(20, DurationScaling::Single, 100))
            .equivalent_mons(MonsterKind::Statue)
            .build(),

        FormId::IceBeast => builder
            .names("Ice", "ice beast-form", "ice_beast")
            .description("a creature of crystalline ice")
            .untransform_message("Your icy body melts away.")
            .blocks(EquipSlots::PHYSICAL)
            .size(SizeCategory::Large)
            .hp_mod(12)
            .resists(ResistFlags::cold(3) | ResistFlags::fire(-1))
            .ac(5, 10, 0)
            .unarmed(10, 10)
            .attack(Brand::Freezing, Colour::White, "", AttackVerbs::ANIMAL)
            .capabilities(Keep, Enable, Keep)
            .physiology(true, false)
            .shout("howl", 0)
            .body_parts("paw", "paw")
            .duration(DurationSpec::new(30, DurationScaling::Single, 100))
            .equivalent_mons(MonsterKind::IceBeast)
            .build(),

        FormId::Dragon => builder
            .variant(FormVariant::Dragon)
            .names("Dragon", "dragon-form", "dragon")
            .description("a fearsome dragon")
            .blocks(EquipSlots::PHYSICAL)
            .size(SizeCategory::Giant)
            .stat_mods(10, 0)
            .hp_mod(15)
            .resists(ResistFlags::poison(1))
            .ac(10, 20, 0)
            .unarmed(10, 12)
            .attack(Brand::Normal, Colour::Green, "Teeth and claws", AttackVerbs::ANIMAL)
            .capabilities(Enable, Keep, Keep)
            .physiology(true, false)
            .shout("roar", 4)
            .body_parts("foreclaw", "hindclaw")
            .duration(DurationSpec::new(20, DurationScaling::Single, 100))
            .equivalent_mons(MonsterKind::FireDragon)
            .build(),

        FormId::Lich => builder
            .variant(FormVariant::Lich)
            .names("Lich", "lich-form", "lich")
            .description("a lich")
            .untransform_message("You feel yourself come back to life.")
            .resists(
                ResistFlags::cold(1)
                    | ResistFlags::negative(3)
                    | ResistFlags::poison(3)
                    | ResistFlags::RES_ROT,
            )
            .ac(6, 0, 0)
            .unarmed(10, 5)
            .attack(Brand::Draining, Colour::Magenta, "", AttackVerbs::DEFAULT)
            .capabilities(Keep, Keep, Forbid)
            .physiology(false, true)
            .duration(DurationSpec::new(20, DurationScaling::Double, 100))
            .equivalent_mons(MonsterKind::Lich)
            .build(),

        FormId::Bat => builder
            .variant(FormVariant::Bat)
            .names("Bat", "bat-form", "bat")
            .description("a bat")
            .blocks(EquipSlots::PHYSICAL | EquipSlots::RINGS)
            .size(SizeCategory::Tiny)
            .stat_mods(-5, 5)
            .stealth_mod(20)
            .casting(false, 0)
            .unarmed(12, 5)
            .attack(Brand::Normal, Colour::LightGrey, "Teeth", AttackVerbs::ANIMAL)
            .capabilities(Enable, Keep, Keep)
            .physiology(true, false)
            .shout("squeak", -8)
            .body_parts("wing", "foot")
            .duration(DurationSpec::new(20, DurationScaling::Single, 100))
            .equivalent_mons(MonsterKind::Bat)
            .build(),

        FormId::Pig => builder
            .names("Pig", "pig-form", "pig")
            .description("a filthy swine")
            .blocks(EquipSlots::PHYSICAL | EquipSlots::RINGS)
            .size(SizeCategory::Small)
            .casting(false, 0)
            .unarmed(0, 3)
            .attack(Brand::Normal, Colour::LightGrey, "Teeth", AttackVerbs::ANIMAL)
            .physiology(true, false)
            .shout("squeal", 0)
            .body_parts("front trotter", "trotter")
            .duration(DurationSpec::new(15, DurationScaling::OneAndAHalf, 100))
            .equivalent_mons(MonsterKind::Hog)
            .build(),

        FormId::Appendage => builder
            .variant(FormVariant::Appendage)
            .names("App", "appendage", "appendage")
            .description("a creature with extra appendages")
            .untransform_message("Your extra appendages shrink away.")
            .blocks(EquipSlots::BOOTS)
            .duration(DurationSpec::new(10, DurationScaling::Single, 60))
            .build(),

        FormId::Tree => builder
            .variant(FormVariant::Tree)
            .names("Tree", "tree-form", "tree")
            .description("a tree")
            .untransform_message("You feel less wooden.")
            .blocks(EquipSlots::STATUE | EquipSlots::CLOAK)
            .size(SizeCategory::Large)
            .stat_mods(10, -5)
            .hp_mod(15)
            .resists(ResistFlags::poison(1) | ResistFlags::RES_ROT)
            .ac(20, 0, 50)
            .casting(false, 0)
            .unarmed(10, 12)
            .attack(
                Brand::Normal,
                Colour::Brown,
                "Branches",
                AttackVerbs::new("hit", "smack", "pummel", "thrash"),
            )
            .capabilities(Forbid, Forbid, Forbid)
            .physiology(false, false)
            .shout("creak", 0)
            .body_parts("branch", "root")
            .duration(DurationSpec::new(50, DurationScaling::Tenth, 100))
            .equivalent_mons(MonsterKind::AnimatedTree)
            .build(),

        FormId::Wisp => builder
            .names("Wisp", "wisp-form", "wisp")
            .description("an insubstantial wisp")
            .untransform_message("You cease to be insubstantial.")
            .blocks(EquipSlots::ALL)
            .size(SizeCategory::Tiny)
            .stealth_mod(25)
            .hp_mod(5)
            .resists(
                ResistFlags::poison(3)
                    | ResistFlags::fire(2)
                    | ResistFlags::cold(2)
                    | ResistFlags::negative(3)
                    | ResistFlags::RES_ELEC
                    | ResistFlags::RES_ACID
                    | ResistFlags::RES_ROT
                    | ResistFlags::RES_STICKY_FLAME,
            )
            .ac(5, 0, 0)
            .casting(false, 0)
            .unarmed(10, 5)
            .attack(
                Brand::Normal,
                Colour::LightGrey,
                "Misty tendrils",
                AttackVerbs::new("touch", "hit", "engulf", "engulf"),
            )
            .capabilities(Enable, Keep, Forbid)
            .physiology(false, false)
            .shout("whoosh", -8)
            .body_parts("misty tendril", "strand")
            .duration(DurationSpec::new(20, DurationScaling::Single, 100))
            .equivalent_mons(MonsterKind::InsubstantialWisp)
            .build(),

        FormId::Fungus => builder
            .names("Fungus", "fungus-form", "fungus")
            .description("a sentient fungus")
            .untransform_message("You stop sporulating.")
            .blocks(EquipSlots::PHYSICAL)
            .size(SizeCategory::Tiny)
            .stealth_mod(30)
            .resists(ResistFlags::poison(3) | ResistFlags::RES_ROT)
            .ac(12, 0, 0)
            .casting(false, 0)
            .unarmed(10, 12)
            .attack(
                Brand::Confusion,
                Colour::LightGrey,
                "Spores",
                AttackVerbs::new(SPORES, SPORES, SPORES, SPORES),
            )
            .capabilities(Keep, Keep, Forbid)
            .physiology(false, false)
            .body_parts("hypha", "hypha")
            .duration(DurationSpec::new(10, DurationScaling::Single, 100))
            .equivalent_mons(MonsterKind::WanderingMushroom)
            .build(),

        FormId::Shadow => builder
            .variant(FormVariant::Shadow)
            .names("Shadow", "shadow-form", "shadow")
            .description("a swirling mass of dark shadows")
            .untransform_message("You feel less shadowy.")
            .stealth_mod(30)
            .resists(ResistFlags::negative(3) | ResistFlags::poison(3) | ResistFlags::RES_ROT)
            .casting(true, 20)
            .attack(Brand::Draining, Colour::Magenta, "", AttackVerbs::DEFAULT)
            .capabilities(Keep, Keep, Forbid)
            .duration(DurationSpec::new(10, DurationScaling::Double, 100))
            .equivalent_mons(MonsterKind::PlayerShadow)
            .build(),

        FormId::Hydra => builder
            .variant(FormVariant::Hydra)
            .names("Hydra", "hydra-form", "hydra")
            .description("a hydra")
            .blocks(EquipSlots::PHYSICAL)
            .size(SizeCategory::Big)
            .hp_mod(13)
            .resists(ResistFlags::poison(1))
            .ac(6, 0, 20)
            .casting(false, 0)
            .unarmed(10, 10)
            .attack(
                Brand::Normal,
                Colour::Green,
                "Bite",
                AttackVerbs::new("nip at", "bite", "gouge", "chomp"),
            )
            .capabilities(Keep, Enable, Keep)
            .physiology(true, false)
            .shout("roar", 0)
            .body_parts("foreclaw", "hindclaw")
            .duration(DurationSpec::new(20, DurationScaling::Single, 100))
            .equivalent_mons(MonsterKind::Hydra)
            .build(),
    }
}
