use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Generate a synthetic ProcessedTweets.csv: one projected 2-D cluster per
/// month with month-specific sentiment bias, suitable for exercising the
/// dashboard's filters and box selection.
fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // (month, cluster center, sentiment bias)
    let months: [(&str, [f64; 2], f64); 5] = [
        ("April", [-4.0, 3.0], -0.3),
        ("May", [0.0, -2.0], -0.1),
        ("June", [3.5, 2.5], 0.1),
        ("July", [6.0, -1.0], 0.3),
        ("August", [-1.5, 5.5], 0.2),
    ];

    let topics = [
        "the new transit line",
        "last night's game",
        "the heat wave",
        "local elections",
        "weekend festival plans",
        "rising grocery prices",
    ];
    let moods = [
        "can't believe",
        "so happy about",
        "completely done with",
        "cautiously optimistic about",
        "still thinking about",
    ];

    let output_path = "ProcessedTweets.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer
        .write_record([
            "Dimension 1",
            "Dimension 2",
            "Sentiment",
            "Subjectivity",
            "Month",
            "RawTweet",
        ])
        .context("writing header")?;

    let per_month = 100;
    let mut total = 0usize;

    for (month, center, bias) in months {
        for i in 0..per_month {
            let x = rng.gauss(center[0], 1.2);
            let y = rng.gauss(center[1], 1.2);
            let sentiment = rng.gauss(bias, 0.4).clamp(-1.0, 1.0);
            let subjectivity = rng.gauss(0.5, 0.25).clamp(0.0, 1.0);

            let topic = topics[(rng.next_u64() as usize) % topics.len()];
            let mood = moods[(rng.next_u64() as usize) % moods.len()];
            let text = format!("{mood} {topic} #{month}{i}");

            writer
                .write_record([
                    format!("{x:.4}"),
                    format!("{y:.4}"),
                    format!("{sentiment:.4}"),
                    format!("{subjectivity:.4}"),
                    month.to_string(),
                    text,
                ])
                .with_context(|| format!("writing row {total}"))?;
            total += 1;
        }
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {total} tweets to {output_path}");
    Ok(())
}
