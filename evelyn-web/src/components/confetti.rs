use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use yew::prelude::*;

const PIECES: usize = 36;
const GLYPHS: [&str; 6] = ["✨", "🎉", "⭐", "💠", "🔶", "🔷"];

#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub x_pct: f32,
    pub rotation_deg: f32,
    pub glyph: &'static str,
}

/// Deterministic confetti burst for a seed.
#[must_use]
pub fn burst(seed: u64) -> Vec<Piece> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    (0..PIECES)
        .map(|_| Piece {
            x_pct: rng.r#gen::<f32>() * 100.0,
            rotation_deg: rng.r#gen::<f32>() * 360.0,
            glyph: GLYPHS.choose(&mut rng).copied().unwrap_or("✨"),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub seed: u64,
}

#[function_component(Confetti)]
pub fn confetti(props: &Props) -> Html {
    let pieces = use_memo(props.seed, |seed| burst(*seed));
    html! {
        <div class="confetti" aria-hidden="true">
            { for pieces.iter().enumerate().map(|(idx, piece)| html! {
                <div
                    key={idx}
                    class="confetti-piece"
                    style={format!("left:{:.1}%;transform:rotate({:.0}deg);", piece.x_pct, piece.rotation_deg)}
                >
                    { piece.glyph }
                </div>
            }) }
        </div>
    }
}
