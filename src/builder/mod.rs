mod ec;
mod qr;

pub use ec::{assemble_final_codewords, compute_error_correction_codewords};
pub use qr::{build_module_matrix, Module, ModuleMatrix};

use tracing::{debug, info};

use crate::common::{
    codec::{determine_smallest_version, encode_with_version, select_mode},
    error::QRResult,
    metadata::{ECLevel, Version},
};

pub struct QRBuilder<'a> {
    text: &'a str,
    version: Option<Version>,
    ec_level: ECLevel,
}

impl<'a> QRBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, version: None, ec_level: ECLevel::M }
    }

    pub fn text(&mut self, text: &'a str) -> &mut Self {
        self.text = text;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn metadata(&self) -> String {
        match self.version {
            Some(v) => format!("{{ Version: {:?}, Ec level: {:?} }}", *v, self.ec_level),
            None => format!("{{ Version: None, Ec level: {:?} }}", self.ec_level),
        }
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<ModuleMatrix> {
        info!("Generating QR {}", self.metadata());

        let mode = select_mode(self.text);
        let version = match self.version {
            Some(v) => v,
            None => {
                debug!("Finding smallest version...");
                determine_smallest_version(self.text, self.ec_level)?
            }
        };
        debug!(?mode, %version, "Encoding data...");
        let data = encode_with_version(self.text, version, self.ec_level)?;

        debug!("Computing error correction codewords...");
        let ecc = compute_error_correction_codewords(&data, version, self.ec_level)?;
        let codewords = assemble_final_codewords(data.data(), &ecc);

        debug!(codewords = codewords.len(), "Constructing module matrix...");
        let qr = build_module_matrix(&codewords, version)?;

        let total_modules = qr.width() * qr.width();
        let dark_modules = qr.count_dark_modules();
        info!(
            data_codewords = data.len() >> 3,
            ecc_codewords = ecc.len(),
            dark_modules,
            light_modules = total_modules - dark_modules,
            "QR generated"
        );

        Ok(qr)
    }
}
