//! Thin CLI over the packet renderer: read a generated-packet JSON file,
//! write the student worksheet and the teacher key (and, on request, the
//! static skill tracker).

use std::env;
use std::fs;
use std::path::Path;

use packet_pdf::{Mode, render_packet, render_tracker};
use phonics_core::GeneratedPacket;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging stays in the binary so the libraries remain unopinionated.
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: packet <packet.json> <out-dir> [--tracker]");
        std::process::exit(2);
    }
    let input = &args[1];
    let out_dir = Path::new(&args[2]);

    let raw = fs::read_to_string(input)?;
    let packet = GeneratedPacket::from_model_text(&raw)?;
    log::info!("loaded packet with {} activities", packet.activities.len());

    fs::create_dir_all(out_dir)?;
    let mut rng = rand::thread_rng();
    fs::write(
        out_dir.join("Student_Worksheet.pdf"),
        render_packet(&packet, Mode::Student, &mut rng),
    )?;
    fs::write(
        out_dir.join("Teacher_Key.pdf"),
        render_packet(&packet, Mode::Key, &mut rng),
    )?;
    if args.iter().any(|a| a == "--tracker") {
        fs::write(out_dir.join("Skill_Tracker.pdf"), render_tracker())?;
    }
    Ok(())
}
