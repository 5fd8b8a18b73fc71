//! Mission backstory and agency lore text.
//!
//! Backstories are a fixed template per language with one randomly chosen
//! complication and, for the badge edition, a hazard report appended.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::commanders::Commander;
use crate::constants::FALLBACK_RIVAL_NAME;
use crate::language::Language;

pub const COMPLICATIONS: [&str; 28] = [
    "the clocktower gears are spinning out of control",
    "a rival crew is racing you to the treasure chest",
    "storm clouds are gathering over the secret lagoon",
    "the last bridge before the volcano erupts is starting to crumble",
    "a swarm of golden fireflies is escaping into the night sky",
    "the frost giants are sealing the mountain pass with ice",
    "tidal waves are sweeping away the sandcastle kingdom",
    "a rival explorer is almost at the hidden cave entrance",
    "the drawbridge to the fortress is starting to rise",
    "sandstorms are closing in on the desert runway",
    "a rogue airship is circling above the harbour",
    "lava is creeping towards the crystal mines",
    "a meteor shower is heading for the jungle canopy",
    "the rainbow tunnel is fading into darkness",
    "the glacier path is melting in the midday sun",
    "pirates are surrounding the candy island",
    "giant whirlpools are forming in the coral sea",
    "the moonlight portal is about to vanish",
    "thunder cracks above the glass mountain",
    "a rival treasure hunter is just steps behind you",
    "the golden key is sinking into quicksand",
    "the ancient library doors are closing forever",
    "lightning is striking the tower beacon",
    "the last ferry is leaving the enchanted dock",
    "snow is burying the village gates",
    "the hidden passage is sealing shut",
    "a shadow army is marching towards the valley",
    "the crystal bridge is shattering beneath your feet",
];

pub const HAZARDS: [&str; 8] = [
    "storm incoming",
    "enemy drone spotted",
    "magnetic interference",
    "slippery route",
    "mysterious footprints",
    "low visibility",
    "echoes in the tunnel",
    "decoy signals",
];

const LORE_EN: &str = "The world needs Agent Evelyn. Strange portals flicker open, magnetic storms scramble our maps, \
and rival operatives race to snatch Earth’s wonders. The Agency entrusts you to protect the planet, rescue what matters, \
and light the path for the next generation of agents. Every mission is a piece of the bigger puzzle.";

const LORE_FR: &str = "Le monde a besoin d'Agent Evelyn. Des portails s'ouvrent, des tempêtes magnétiques brouillent nos cartes, \
et des rivaux veulent capturer nos trésors naturels. L'Agence te charge de protéger la planète, de sauver ce qui compte, \
et d'ouvrir la voie à la prochaine génération d'agents. Chaque mission est une pièce du grand puzzle.";

/// Inputs for one backstory draw.
#[derive(Debug, Clone, Copy)]
pub struct BackstoryRequest<'a> {
    pub task: &'a str,
    pub commander: &'a Commander,
    pub language: Language,
    pub rival_name: Option<&'a str>,
    pub include_hazard: bool,
}

impl<'a> BackstoryRequest<'a> {
    #[must_use]
    pub const fn new(task: &'a str, commander: &'a Commander, language: Language) -> Self {
        Self {
            task,
            commander,
            language,
            rival_name: None,
            include_hazard: false,
        }
    }

    #[must_use]
    pub const fn with_rival(mut self, rival_name: Option<&'a str>) -> Self {
        self.rival_name = rival_name;
        self
    }

    #[must_use]
    pub const fn with_hazard(mut self, include_hazard: bool) -> Self {
        self.include_hazard = include_hazard;
        self
    }

    fn rival(&self) -> &'a str {
        self.rival_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_RIVAL_NAME)
    }
}

fn pick<'p, R: Rng + ?Sized>(pool: &'p [&'p str], rng: &mut R) -> &'p str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Build a narrated backstory. The task text is inserted verbatim.
///
/// Two calls with the same request usually differ; shuffling relies on that.
pub fn generate<R: Rng + ?Sized>(request: &BackstoryRequest<'_>, rng: &mut R) -> String {
    let complication = pick(&COMPLICATIONS, rng);
    let hazard = request.include_hazard.then(|| pick(&HAZARDS, rng));
    let commander = &request.commander.name;
    let task = request.task;
    let rival = request.rival();

    let mut story = match request.language {
        Language::French => format!(
            "{commander}: Votre prochaine mission: {task} avant que {complication}. Chaque instant compte — {rival} se rapproche."
        ),
        Language::English => format!(
            "{commander}: For your next mission, you must {task} before {complication}. Every moment counts — {rival} is closing in."
        ),
    };

    if let Some(hazard) = hazard {
        match request.language {
            Language::French => story.push_str(&format!(" Nos capteurs détectent {hazard}.")),
            Language::English => story.push_str(&format!(" Sensors report {hazard}.")),
        }
    }

    story
}

/// Agency lore read aloud on the story screen.
#[must_use]
pub const fn global_lore(language: Language) -> &'static str {
    match language {
        Language::English => LORE_EN,
        Language::French => LORE_FR,
    }
}
