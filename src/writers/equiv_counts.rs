
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::data_types::experiment::Experiment;
use crate::writers::error::{WriterError, create_folder, open_error, write_error};

/// Name of the equivalence class file inside the aux folder
pub const EQ_CLASSES_FILENAME: &str = "eq_classes.txt";

/// Writes the transcript names and equivalence classes to `<aux_folder>/eq_classes.txt`.
/// The layout is the number of transcripts, the number of classes, one transcript name per line, and then
/// one line per class: `<group size>\t<tid>\t...\t<tid>\t<count>`.
/// # Arguments
/// * `aux_folder` - the aux folder, created if missing
/// * `experiment` - the finished experiment
/// # Errors
/// * if the folder cannot be created or the file cannot be written
pub fn write_equiv_counts<E: Experiment + ?Sized>(aux_folder: &Path, experiment: &E) -> Result<(), WriterError> {
    create_folder(aux_folder)?;
    let eq_filename = aux_folder.join(EQ_CLASSES_FILENAME);
    info!("Writing equivalence classes to {eq_filename:?}...");

    let file = File::create(&eq_filename)
        .map_err(open_error(&eq_filename))?;
    let mut writer = BufWriter::new(file);
    write_equiv_table(&mut writer, experiment)
        .and_then(|()| writer.flush())
        .map_err(write_error(&eq_filename))
}

/// Core writer for the equivalence class table, split out so it can target any sink
fn write_equiv_table<W: Write, E: Experiment + ?Sized>(writer: &mut W, experiment: &E) -> std::io::Result<()> {
    let transcripts = experiment.transcripts();
    let eq_classes = experiment.equivalence_classes();

    writeln!(writer, "{}", transcripts.len())?;
    writeln!(writer, "{}", eq_classes.len())?;
    for t in transcripts.iter() {
        writeln!(writer, "{}", t.ref_name)?;
    }

    for eq_class in eq_classes.iter() {
        // every id is followed by a tab, including the last one before the count
        write!(writer, "{}\t", eq_class.len())?;
        for tid in eq_class.transcripts.iter() {
            write!(writer, "{tid}\t")?;
        }
        writeln!(writer, "{}", eq_class.count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::test_experiment::TestExperiment;

    #[test]
    fn test_equiv_table() {
        let experiment = TestExperiment::three_transcripts();
        let mut out: Vec<u8> = vec![];
        write_equiv_table(&mut out, &experiment).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "3\n3\nA\nB\nC\n1\t0\t60\n2\t0\t1\t140\n3\t2\t1\t0\t800\n");
    }

    #[test]
    fn test_write_equiv_counts() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let aux_folder = tmp_dir.path().join("aux_info");
        let experiment = TestExperiment::three_transcripts();
        write_equiv_counts(&aux_folder, &experiment).unwrap();

        let text = std::fs::read_to_string(aux_folder.join(EQ_CLASSES_FILENAME)).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        let num_transcripts: usize = lines[0].parse().unwrap();
        let num_classes: usize = lines[1].parse().unwrap();
        assert_eq!(num_transcripts, 3);
        assert_eq!(num_classes, 3);
        assert_eq!(&lines[2..5], &["A", "B", "C"]);

        // group size prefix matches the ids and every id is in range
        for row in lines[5..].iter() {
            let fields: Vec<u64> = row.split('\t').map(|f| f.parse().unwrap()).collect();
            let group_size = fields[0] as usize;
            assert_eq!(fields.len(), group_size + 2);
            assert!(fields[1..=group_size].iter().all(|&tid| (tid as usize) < num_transcripts));
        }

        // existing folder is not an error, and the file is overwritten
        write_equiv_counts(&aux_folder, &experiment).unwrap();
        let text2 = std::fs::read_to_string(aux_folder.join(EQ_CLASSES_FILENAME)).unwrap();
        assert_eq!(text, text2);
    }

    #[test]
    fn test_empty_experiment() {
        let experiment = TestExperiment::empty();
        let mut out: Vec<u8> = vec![];
        write_equiv_table(&mut out, &experiment).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0\n0\n");
    }
}
