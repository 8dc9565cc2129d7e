// src/bin/init_data.rs
//
// One-shot initializer: writes the sample Chemistry and Material Science
// question files into the configured data directory. Run once before
// starting the server against an empty data directory.

use annotation_backend::config::Config;
use annotation_backend::models::question::{Answer, Question, QuestionFile};
use annotation_backend::store::domain_file_name;
use std::fs;
use std::path::Path;

fn question(id: &str, text: &str, answers: &[(&str, &str)]) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        answers: answers
            .iter()
            .map(|(id, text)| Answer {
                id: id.to_string(),
                text: text.to_string(),
            })
            .collect(),
    }
}

fn chemistry_questions() -> QuestionFile {
    QuestionFile {
        questions: vec![
            question(
                "chem-q1",
                "Explain the concept of electronegativity and its importance in chemical bonding.",
                &[
                    (
                        "chem-q1-a1",
                        "Electronegativity is a measure of an atom's ability to attract shared electrons in a chemical bond. The difference in electronegativity between atoms determines the type of bond formed: covalent, polar covalent, or ionic, which is crucial for predicting molecular properties and reactivity.",
                    ),
                    (
                        "chem-q1-a2",
                        "Electronegativity refers to how strongly atoms pull electrons toward themselves in a bond. Elements like fluorine and oxygen have high values, while metals like sodium have low values; unequal sharing creates polar molecules with partial charges, affecting everything from solubility to reaction mechanisms.",
                    ),
                    (
                        "chem-q1-a3",
                        "Electronegativity is the tendency of an atom to attract electrons in a chemical bond. It increases across periods and decreases down groups in the periodic table, and it helps explain solubility, reactivity, and how molecules interact with each other.",
                    ),
                ],
            ),
            question(
                "chem-q2",
                "Describe the properties of noble gases and explain their low reactivity.",
                &[
                    (
                        "chem-q2-a1",
                        "Noble gases (Group 18 elements) have complete valence electron shells, which grants them exceptional stability. They exist as monatomic gases with low melting and boiling points, and their inertness gives them applications in lighting, cryogenics, and inert reaction atmospheres.",
                    ),
                    (
                        "chem-q2-a2",
                        "Noble gases exhibit low reactivity due to their full valence shells. Having achieved the stable octet configuration (or duet for helium), they have little incentive to form bonds, though compounds of the heavier ones can be formed under extreme conditions with highly electronegative elements.",
                    ),
                    (
                        "chem-q2-a3",
                        "The low reactivity of noble gases stems from their completely filled outer electron shell. This arrangement is energetically favorable and stable, so these elements have little driving force to participate in chemical reactions.",
                    ),
                ],
            ),
            question(
                "chem-q3",
                "Compare and contrast ionic, covalent, and metallic bonding.",
                &[
                    (
                        "chem-q3-a1",
                        "Ionic bonding involves electron transfer between atoms with large electronegativity differences, creating ions held together by electrostatic forces. Covalent bonding involves electron sharing between similar atoms, forming discrete molecules. Metallic bonding delocalizes valence electrons in a 'sea' among positive metal ion cores, explaining conductivity and malleability.",
                    ),
                    (
                        "chem-q3-a2",
                        "The three primary chemical bonds differ in electron behavior: transferred in ionic bonds, shared in covalent bonds, and delocalized in metallic bonds. This explains why ionic compounds are brittle crystalline solids, covalent compounds form discrete molecules, and metals conduct electricity and deform without shattering.",
                    ),
                    (
                        "chem-q3-a3",
                        "Chemical bonding varies based on how electrons interact between atoms. Ionic compounds arrange oppositely charged ions in crystal lattices, covalent molecules have specific geometries and lower melting points, and metals consist of cations in a sea of mobile electrons. Each bonding type represents a different way atoms achieve a stable electron configuration.",
                    ),
                ],
            ),
        ],
    }
}

fn material_science_questions() -> QuestionFile {
    QuestionFile {
        questions: vec![
            question(
                "mat-q1",
                "Describe the relationship between crystal structure and mechanical properties in metals.",
                &[
                    (
                        "mat-q1-a1",
                        "Crystal structure influences mechanical properties through atomic packing and slip systems. FCC metals like aluminum are highly ductile with numerous slip systems, HCP metals like titanium are stronger but less ductile, and BCC metals like iron offer a balance. Grain size also matters: smaller grains increase strength through the Hall-Petch relationship.",
                    ),
                    (
                        "mat-q1-a2",
                        "The mechanical properties of metals are fundamentally determined by their crystal structure. Different arrangements (BCC, FCC, HCP) create varying degrees of atomic packing and available slip planes, which dictate how easily dislocations move when stress is applied and whether the metal is brittle or ductile.",
                    ),
                    (
                        "mat-q1-a3",
                        "Crystal structures establish how atoms are arranged and bonded, directly affecting mechanical behavior. The number and orientation of slip systems control deformation mechanisms, while grain boundaries obstruct dislocation movement, increasing strength but potentially reducing ductility.",
                    ),
                ],
            ),
            question(
                "mat-q2",
                "Explain the principles of composite materials and their advantages over traditional materials.",
                &[
                    (
                        "mat-q2-a1",
                        "Composite materials combine two or more materials with different properties into a system superior to its individual components, typically a continuous matrix phase and a dispersed reinforcement phase. The combination allows exceptional strength-to-weight ratios and properties customizable by composition, orientation, and fabrication method.",
                    ),
                    (
                        "mat-q2-a2",
                        "Composites exploit the principle that properties of the whole exceed those of the parts. Carbon fiber reinforced polymers, for example, offer exceptional strength while being far lighter than steel, and composites can be tailored for directional properties with better fatigue and corrosion resistance.",
                    ),
                    (
                        "mat-q2-a3",
                        "Composite materials are a design philosophy where multiple materials work together to overcome the limitations of monolithic ones: the matrix provides shape and protects the reinforcement, while the reinforcement bears load. Unlike metals or ceramics, composites can be engineered with anisotropic properties to match specific loading conditions.",
                    ),
                ],
            ),
            question(
                "mat-q3",
                "Discuss the importance of phase diagrams in materials processing and design.",
                &[
                    (
                        "mat-q3-a1",
                        "Phase diagrams map the thermodynamic relationships between temperature, pressure, and composition that govern material systems. They serve as roadmaps for processing, revealing stable phase regions, transformation temperatures, and solubility limits used to design heat treatments and alloy compositions.",
                    ),
                    (
                        "mat-q3-a2",
                        "Phase diagrams show the conditions under which different phases exist in equilibrium. With them, engineers can manipulate microstructures through heat treatment, predict behavior during manufacturing, and troubleshoot processing issues by identifying transformations that might occur during fabrication.",
                    ),
                    (
                        "mat-q3-a3",
                        "Phase diagrams illustrate equilibrium relationships between phases, showing where transformations occur and what microstructures develop. Precipitation hardening, eutectic structures, and controlled solidification all rely on the insight they provide.",
                    ),
                ],
            ),
        ],
    }
}

fn write_domain(data_dir: &Path, domain: &str, file: &QuestionFile) -> Result<(), Box<dyn std::error::Error>> {
    let path = data_dir.join(domain_file_name(domain));
    fs::write(&path, serde_json::to_string_pretty(file)?)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    fs::create_dir_all(&config.data_dir)?;

    write_domain(&config.data_dir, "chemistry", &chemistry_questions())?;
    write_domain(&config.data_dir, "material science", &material_science_questions())?;

    println!(
        "Question data files have been created in {}",
        config.data_dir.display()
    );
    Ok(())
}
