/*!
# quant-writer
Serializes the results of a transcript quantification run into a stable on-disk layout:
```text
<output>/
├── quant.sf
└── <aux_dir>/
    ├── eq_classes.txt
    ├── fld.gz, expected_bias.gz, observed_bias.gz, observed_bias_3p.gz
    ├── obs5_seq.gz, obs3_seq.gz, exp5_seq.gz, exp3_seq.gz  (sequence bias correction)
    ├── obs_gc.gz, exp_gc.gz                                (GC bias correction)
    ├── meta_info.json
    └── bootstrap/                                          (bootstrap / Gibbs sampling)
        ├── names.tsv.gz
        └── bootstraps.gz
```
The entry point is [`writers::quant_writer::QuantWriter`].
*/

/// Contains the input model: experiments, transcripts, equivalence classes, and options
pub mod data_types;
/// Various utility functions that tend to be very generic
pub mod util;
/// All output writers
pub mod writers;
