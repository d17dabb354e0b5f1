//! Sounds referenced by entities and their I/O commands

use crate::entity::Entity;
use crate::vocabulary::KeyVocabulary;

/// Sound prefix characters (and stray punctuation) stripped from paths
pub const SOUND_SPECIAL_CHARACTERS: &[char] = &[
    '*', '#', '@', '>', '<', '^', '(', ')', '}', '$', '!', '?', ' ',
];

/// Build the entity sound list
pub fn entity_sounds(entities: &[Entity], vocabulary: &KeyVocabulary) -> Vec<String> {
    let mut sounds = Vec::new();

    for entity in entities {
        for (key, value) in entity.unique_pairs() {
            if vocabulary.is_sound_key(key) {
                sounds.push(sound_path(value));
            } else if value.contains("PlayVO") {
                sounds.extend(io_parameter(value, "PlayVO").map(sound_path));
            } else if value.contains("playgamesound") {
                sounds.extend(io_parameter(value, "playgamesound").map(sound_path));
            } else if value.contains("play") {
                sounds.extend(play_commands(value).map(sound_path));
            }
        }
    }

    log::debug!("{} entity sounds", sounds.len());
    sounds
}

/// `sound/` plus the path with sound prefix characters trimmed
pub fn sound_path(path: &str) -> String {
    format!("sound/{}", path.trim_matches(SOUND_SPECIAL_CHARACTERS))
}

/// The non-blank parameter that follows `input` in a comma-separated I/O string
fn io_parameter<'a>(value: &'a str, input: &str) -> Option<&'a str> {
    let mut tokens = value.split(',');
    tokens.position(|token| token == input)?;
    tokens.next().filter(|param| !param.trim().is_empty())
}

/// Sound names from every `play <sound>` console command in the I/O string
fn play_commands(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .filter(|token| token.starts_with("play "))
        .filter_map(|command| command.split(' ').nth(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sounds_of(value: &str) -> Vec<String> {
        let entities = [Entity::from_pairs([
            ("classname", "logic_relay"),
            ("OnTrigger", value),
        ])];
        entity_sounds(&entities, &KeyVocabulary::new())
    }

    #[test_case("PlayVO,vo/announcer_begins,," => vec!["sound/vo/announcer_begins"]; "play vo")]
    #[test_case("point_servercommand,PlayVO,,0,-1" => Vec::<String>::new(); "blank play vo")]
    #[test_case("PlayVO" => Vec::<String>::new(); "play vo without parameter")]
    #[test_case("tf_gamerules,playgamesound,#ambient/siren.wav,0,-1" => vec!["sound/ambient/siren.wav"]; "play game sound")]
    #[test_case("client,Command,play ambient/alarm.wav,0,-1" => vec!["sound/ambient/alarm.wav"]; "play command")]
    #[test_case("a,play x.wav,play *y.wav,b" => vec!["sound/x.wav", "sound/y.wav"]; "several play commands")]
    #[test_case("client,Command,playvol a.wav 1,0,-1" => Vec::<String>::new(); "playvol is not play")]
    fn test_io_sounds(value: &str) -> Vec<String> {
        sounds_of(value)
    }

    #[test]
    fn test_sound_keys() {
        let vocab = KeyVocabulary::new().with_sound_keys(["message"]);
        let entities = [Entity::from_pairs([
            ("classname", "ambient_generic"),
            ("Message", "#^ambient/wind.wav"),
        ])];
        assert_eq!(
            entity_sounds(&entities, &vocab),
            vec!["sound/ambient/wind.wav"]
        );
    }

    #[test]
    fn test_sound_path_trims_both_ends() {
        assert_eq!(sound_path(")weapons/shot.wav "), "sound/weapons/shot.wav");
    }
}
