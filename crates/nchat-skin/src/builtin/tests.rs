use nchat_types::color::{WcagLevel, meets_contrast_requirement};
use nchat_types::error::{NchatError, RecordKind};

use super::*;
use crate::css::{SKIN_PREFIX, skin_to_css_variables};
use crate::tokens::design_tokens;
use crate::validate::{
    validate_behavior, validate_behavior_extension, validate_profile, validate_skin,
    validate_skin_extension,
};

#[test]
fn catalog_ids() {
    assert_eq!(
        builtin_ids(),
        ["nchat", "whatsapp", "telegram", "discord", "slack", "signal"]
    );
    assert!(builtin_ids().contains(&DEFAULT_ID));
}

#[test]
fn every_builtin_loads_and_validates() {
    for id in builtin_ids() {
        let skin = skin(id).unwrap();
        let r = validate_skin(&skin);
        assert!(r.valid, "skin {id}: {:?}", r.errors);
        assert_eq!(skin.id, id);

        let behavior = behavior(id).unwrap();
        let r = validate_behavior(&behavior);
        assert!(r.valid, "behavior {id}: {:?}", r.errors);
        assert_eq!(behavior.id, id);

        let ext = skin_extension(id).unwrap();
        assert!(validate_skin_extension(&ext).valid, "skin extension {id}");
        assert_eq!(ext.id, id);

        let ext = behavior_extension(id).unwrap();
        assert!(validate_behavior_extension(&ext).valid, "behavior extension {id}");

        let p = profile(id).unwrap();
        assert!(validate_profile(&p).valid);
        assert_eq!((p.skin_id.as_str(), p.behavior_id.as_str()), (id, id));
    }
}

#[test]
fn every_palette_meets_aa() {
    for id in builtin_ids() {
        let skin = skin(id).unwrap();
        for (mode, p) in [("light", &skin.colors), ("dark", &skin.dark_mode.colors)] {
            for (fg, bg) in [(&p.text, &p.background), (&p.text, &p.surface)] {
                assert!(
                    meets_contrast_requirement(fg, bg, WcagLevel::Aa, false),
                    "{id} {mode}: {fg} on {bg}"
                );
            }
            assert!(
                meets_contrast_requirement(
                    &p.button_primary_text,
                    &p.button_primary_bg,
                    WcagLevel::Aa,
                    true
                ),
                "{id} {mode}: primary button"
            );
        }
    }
}

#[test]
fn slack_primary_is_aubergine() {
    let vars = skin_to_css_variables(&skin("slack").unwrap(), false, SKIN_PREFIX).unwrap();
    assert_eq!(vars.get("--skin-primary").map(String::as_str), Some("#611F69"));
}

#[test]
fn slack_base_type_step() {
    let tokens = design_tokens(&skin("slack").unwrap(), false);
    assert_eq!(tokens.type_scale.base.font_size, "15px");
    assert_eq!(tokens.type_scale.base.line_height, "1.46668");
}

#[test]
fn platform_behaviors_differ() {
    let whatsapp = behavior("whatsapp").unwrap();
    let discord = behavior("discord").unwrap();
    assert_eq!(whatsapp.messaging.edit_window, 900_000);
    assert_eq!(discord.messaging.max_message_length, 2000);
    assert!(!discord.messaging.read_receipts);
    assert!(behavior("signal").unwrap().privacy.screenshot_protection);
}

#[test]
fn unknown_id_is_not_found() {
    let err = skin("myspace").unwrap_err();
    match err {
        NchatError::NotFound { missing } => {
            assert_eq!(missing.len(), 1);
            assert_eq!(missing[0].kind, RecordKind::Skin);
            assert_eq!(missing[0].id, "myspace");
        },
        other => panic!("unexpected error: {other}"),
    }
    assert!(behavior("myspace").is_err());
    assert!(profile("myspace").is_err());
}
