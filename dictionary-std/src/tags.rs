//! Attribute tag constants and the entries of the bundled registry.
//!
//! Each constant maps an attribute keyword to its tag at compile time.
//! Repeating attributes (such as the overlay group `60xx`)
//! are declared with their open digits zeroed out.

use dcmset_core::dictionary::{DataDictionaryEntryRef, TagRange::*};
use dcmset_core::header::{Tag, VR};

/// Declare the tag constants and the dictionary entry table at once,
/// so that both can never disagree.
macro_rules! attributes {
    ($( $konst: ident = $range: ident($group: literal, $elem: literal), $alias: literal, $vr: ident; )*) => {
        $(
            #[doc = concat!("`", $alias, "` ", stringify!($range), "(", stringify!($group), ", ", stringify!($elem), ") ", stringify!($vr))]
            #[rustfmt::skip]
            pub const $konst: Tag = Tag($group, $elem);
        )*

        /// All attributes of the bundled registry, in tag order.
        pub(crate) const ENTRIES: &[DataDictionaryEntryRef<'static>] = &[
            $(
                DataDictionaryEntryRef {
                    tag: $range($konst),
                    alias: $alias,
                    vr: VR::$vr,
                },
            )*
        ];
    };
}

attributes! {
    COMMAND_GROUP_LENGTH = Single(0x0000, 0x0000), "CommandGroupLength", UL;
    AFFECTED_SOP_CLASS_UID = Single(0x0000, 0x0002), "AffectedSOPClassUID", UI;
    REQUESTED_SOP_CLASS_UID = Single(0x0000, 0x0003), "RequestedSOPClassUID", UI;
    COMMAND_FIELD = Single(0x0000, 0x0100), "CommandField", US;
    MESSAGE_ID = Single(0x0000, 0x0110), "MessageID", US;
    MESSAGE_ID_BEING_RESPONDED_TO = Single(0x0000, 0x0120), "MessageIDBeingRespondedTo", US;
    MOVE_DESTINATION = Single(0x0000, 0x0600), "MoveDestination", AE;
    PRIORITY = Single(0x0000, 0x0700), "Priority", US;
    COMMAND_DATA_SET_TYPE = Single(0x0000, 0x0800), "CommandDataSetType", US;
    STATUS = Single(0x0000, 0x0900), "Status", US;
    AFFECTED_SOP_INSTANCE_UID = Single(0x0000, 0x1000), "AffectedSOPInstanceUID", UI;
    FILE_META_INFORMATION_GROUP_LENGTH = Single(0x0002, 0x0000), "FileMetaInformationGroupLength", UL;
    FILE_META_INFORMATION_VERSION = Single(0x0002, 0x0001), "FileMetaInformationVersion", OB;
    MEDIA_STORAGE_SOP_CLASS_UID = Single(0x0002, 0x0002), "MediaStorageSOPClassUID", UI;
    MEDIA_STORAGE_SOP_INSTANCE_UID = Single(0x0002, 0x0003), "MediaStorageSOPInstanceUID", UI;
    TRANSFER_SYNTAX_UID = Single(0x0002, 0x0010), "TransferSyntaxUID", UI;
    IMPLEMENTATION_CLASS_UID = Single(0x0002, 0x0012), "ImplementationClassUID", UI;
    IMPLEMENTATION_VERSION_NAME = Single(0x0002, 0x0013), "ImplementationVersionName", SH;
    SOURCE_APPLICATION_ENTITY_TITLE = Single(0x0002, 0x0016), "SourceApplicationEntityTitle", AE;
    SPECIFIC_CHARACTER_SET = Single(0x0008, 0x0005), "SpecificCharacterSet", CS;
    LANGUAGE_CODE_SEQUENCE = Single(0x0008, 0x0006), "LanguageCodeSequence", SQ;
    IMAGE_TYPE = Single(0x0008, 0x0008), "ImageType", CS;
    INSTANCE_CREATION_DATE = Single(0x0008, 0x0012), "InstanceCreationDate", DA;
    INSTANCE_CREATION_TIME = Single(0x0008, 0x0013), "InstanceCreationTime", TM;
    SOP_CLASS_UID = Single(0x0008, 0x0016), "SOPClassUID", UI;
    SOP_INSTANCE_UID = Single(0x0008, 0x0018), "SOPInstanceUID", UI;
    STUDY_DATE = Single(0x0008, 0x0020), "StudyDate", DA;
    SERIES_DATE = Single(0x0008, 0x0021), "SeriesDate", DA;
    ACQUISITION_DATE = Single(0x0008, 0x0022), "AcquisitionDate", DA;
    CONTENT_DATE = Single(0x0008, 0x0023), "ContentDate", DA;
    ACQUISITION_DATE_TIME = Single(0x0008, 0x002A), "AcquisitionDateTime", DT;
    STUDY_TIME = Single(0x0008, 0x0030), "StudyTime", TM;
    SERIES_TIME = Single(0x0008, 0x0031), "SeriesTime", TM;
    ACQUISITION_TIME = Single(0x0008, 0x0032), "AcquisitionTime", TM;
    CONTENT_TIME = Single(0x0008, 0x0033), "ContentTime", TM;
    ACCESSION_NUMBER = Single(0x0008, 0x0050), "AccessionNumber", SH;
    QUERY_RETRIEVE_LEVEL = Single(0x0008, 0x0052), "QueryRetrieveLevel", CS;
    RETRIEVE_AE_TITLE = Single(0x0008, 0x0054), "RetrieveAETitle", AE;
    MODALITY = Single(0x0008, 0x0060), "Modality", CS;
    MODALITIES_IN_STUDY = Single(0x0008, 0x0061), "ModalitiesInStudy", CS;
    MANUFACTURER = Single(0x0008, 0x0070), "Manufacturer", LO;
    INSTITUTION_NAME = Single(0x0008, 0x0080), "InstitutionName", LO;
    REFERRING_PHYSICIAN_NAME = Single(0x0008, 0x0090), "ReferringPhysicianName", PN;
    CODE_VALUE = Single(0x0008, 0x0100), "CodeValue", SH;
    CODING_SCHEME_DESIGNATOR = Single(0x0008, 0x0102), "CodingSchemeDesignator", SH;
    CODE_MEANING = Single(0x0008, 0x0104), "CodeMeaning", LO;
    LONG_CODE_VALUE = Single(0x0008, 0x0119), "LongCodeValue", UC;
    URN_CODE_VALUE = Single(0x0008, 0x0120), "URNCodeValue", UR;
    STATION_NAME = Single(0x0008, 0x1010), "StationName", SH;
    STUDY_DESCRIPTION = Single(0x0008, 0x1030), "StudyDescription", LO;
    PROCEDURE_CODE_SEQUENCE = Single(0x0008, 0x1032), "ProcedureCodeSequence", SQ;
    SERIES_DESCRIPTION = Single(0x0008, 0x103E), "SeriesDescription", LO;
    OPERATORS_NAME = Single(0x0008, 0x1070), "OperatorsName", PN;
    MANUFACTURER_MODEL_NAME = Single(0x0008, 0x1090), "ManufacturerModelName", LO;
    REFERENCED_STUDY_SEQUENCE = Single(0x0008, 0x1110), "ReferencedStudySequence", SQ;
    REFERENCED_SERIES_SEQUENCE = Single(0x0008, 0x1115), "ReferencedSeriesSequence", SQ;
    REFERENCED_IMAGE_SEQUENCE = Single(0x0008, 0x1140), "ReferencedImageSequence", SQ;
    REFERENCED_SOP_CLASS_UID = Single(0x0008, 0x1150), "ReferencedSOPClassUID", UI;
    REFERENCED_SOP_INSTANCE_UID = Single(0x0008, 0x1155), "ReferencedSOPInstanceUID", UI;
    REFERENCED_FRAME_NUMBER = Single(0x0008, 0x1160), "ReferencedFrameNumber", IS;
    DERIVATION_DESCRIPTION = Single(0x0008, 0x2111), "DerivationDescription", ST;
    PATIENT_NAME = Single(0x0010, 0x0010), "PatientName", PN;
    PATIENT_ID = Single(0x0010, 0x0020), "PatientID", LO;
    ISSUER_OF_PATIENT_ID = Single(0x0010, 0x0021), "IssuerOfPatientID", LO;
    PATIENT_BIRTH_DATE = Single(0x0010, 0x0030), "PatientBirthDate", DA;
    PATIENT_BIRTH_TIME = Single(0x0010, 0x0032), "PatientBirthTime", TM;
    PATIENT_SEX = Single(0x0010, 0x0040), "PatientSex", CS;
    OTHER_PATIENT_IDS_SEQUENCE = Single(0x0010, 0x1002), "OtherPatientIDsSequence", SQ;
    PATIENT_AGE = Single(0x0010, 0x1010), "PatientAge", AS;
    PATIENT_SIZE = Single(0x0010, 0x1020), "PatientSize", DS;
    PATIENT_WEIGHT = Single(0x0010, 0x1030), "PatientWeight", DS;
    ETHNIC_GROUP = Single(0x0010, 0x2160), "EthnicGroup", SH;
    PREGNANCY_STATUS = Single(0x0010, 0x21C0), "PregnancyStatus", US;
    PATIENT_COMMENTS = Single(0x0010, 0x4000), "PatientComments", LT;
    SLICE_THICKNESS = Single(0x0018, 0x0050), "SliceThickness", DS;
    KVP = Single(0x0018, 0x0060), "KVP", DS;
    REPETITION_TIME = Single(0x0018, 0x0080), "RepetitionTime", DS;
    ECHO_TIME = Single(0x0018, 0x0081), "EchoTime", DS;
    MAGNETIC_FIELD_STRENGTH = Single(0x0018, 0x0087), "MagneticFieldStrength", DS;
    SPACING_BETWEEN_SLICES = Single(0x0018, 0x0088), "SpacingBetweenSlices", DS;
    SOFTWARE_VERSIONS = Single(0x0018, 0x1020), "SoftwareVersions", LO;
    PROTOCOL_NAME = Single(0x0018, 0x1030), "ProtocolName", LO;
    EXPOSURE_TIME = Single(0x0018, 0x1150), "ExposureTime", IS;
    X_RAY_TUBE_CURRENT = Single(0x0018, 0x1151), "XRayTubeCurrent", IS;
    PATIENT_POSITION = Single(0x0018, 0x5100), "PatientPosition", CS;
    STUDY_INSTANCE_UID = Single(0x0020, 0x000D), "StudyInstanceUID", UI;
    SERIES_INSTANCE_UID = Single(0x0020, 0x000E), "SeriesInstanceUID", UI;
    STUDY_ID = Single(0x0020, 0x0010), "StudyID", SH;
    SERIES_NUMBER = Single(0x0020, 0x0011), "SeriesNumber", IS;
    ACQUISITION_NUMBER = Single(0x0020, 0x0012), "AcquisitionNumber", IS;
    INSTANCE_NUMBER = Single(0x0020, 0x0013), "InstanceNumber", IS;
    IMAGE_POSITION_PATIENT = Single(0x0020, 0x0032), "ImagePositionPatient", DS;
    IMAGE_ORIENTATION_PATIENT = Single(0x0020, 0x0037), "ImageOrientationPatient", DS;
    FRAME_OF_REFERENCE_UID = Single(0x0020, 0x0052), "FrameOfReferenceUID", UI;
    SLICE_LOCATION = Single(0x0020, 0x1041), "SliceLocation", DS;
    NUMBER_OF_STUDY_RELATED_INSTANCES = Single(0x0020, 0x1208), "NumberOfStudyRelatedInstances", IS;
    SOURCE_IMAGE_IDS = Element100(0x0020, 0x3100), "SourceImageIDs", CS;
    SAMPLES_PER_PIXEL = Single(0x0028, 0x0002), "SamplesPerPixel", US;
    PHOTOMETRIC_INTERPRETATION = Single(0x0028, 0x0004), "PhotometricInterpretation", CS;
    PLANAR_CONFIGURATION = Single(0x0028, 0x0006), "PlanarConfiguration", US;
    NUMBER_OF_FRAMES = Single(0x0028, 0x0008), "NumberOfFrames", IS;
    FRAME_INCREMENT_POINTER = Single(0x0028, 0x0009), "FrameIncrementPointer", AT;
    ROWS = Single(0x0028, 0x0010), "Rows", US;
    COLUMNS = Single(0x0028, 0x0011), "Columns", US;
    PIXEL_SPACING = Single(0x0028, 0x0030), "PixelSpacing", DS;
    BITS_ALLOCATED = Single(0x0028, 0x0100), "BitsAllocated", US;
    BITS_STORED = Single(0x0028, 0x0101), "BitsStored", US;
    HIGH_BIT = Single(0x0028, 0x0102), "HighBit", US;
    PIXEL_REPRESENTATION = Single(0x0028, 0x0103), "PixelRepresentation", US;
    WINDOW_CENTER = Single(0x0028, 0x1050), "WindowCenter", DS;
    WINDOW_WIDTH = Single(0x0028, 0x1051), "WindowWidth", DS;
    RESCALE_INTERCEPT = Single(0x0028, 0x1052), "RescaleIntercept", DS;
    RESCALE_SLOPE = Single(0x0028, 0x1053), "RescaleSlope", DS;
    RESCALE_TYPE = Single(0x0028, 0x1054), "RescaleType", LO;
    RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR = Single(0x0028, 0x1101), "RedPaletteColorLookupTableDescriptor", US;
    GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR = Single(0x0028, 0x1102), "GreenPaletteColorLookupTableDescriptor", US;
    BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR = Single(0x0028, 0x1103), "BluePaletteColorLookupTableDescriptor", US;
    RED_PALETTE_COLOR_LOOKUP_TABLE_DATA = Single(0x0028, 0x1201), "RedPaletteColorLookupTableData", OW;
    GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA = Single(0x0028, 0x1202), "GreenPaletteColorLookupTableData", OW;
    BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA = Single(0x0028, 0x1203), "BluePaletteColorLookupTableData", OW;
    LOSSY_IMAGE_COMPRESSION = Single(0x0028, 0x2110), "LossyImageCompression", CS;
    SCHEDULED_PROCEDURE_STEP_SEQUENCE = Single(0x0040, 0x0100), "ScheduledProcedureStepSequence", SQ;
    REQUEST_ATTRIBUTES_SEQUENCE = Single(0x0040, 0x0275), "RequestAttributesSequence", SQ;
    MEASUREMENT_UNITS_CODE_SEQUENCE = Single(0x0040, 0x08EA), "MeasurementUnitsCodeSequence", SQ;
    REAL_WORLD_VALUE_MAPPING_SEQUENCE = Single(0x0040, 0x9096), "RealWorldValueMappingSequence", SQ;
    VALUE_TYPE = Single(0x0040, 0xA040), "ValueType", CS;
    CONCEPT_NAME_CODE_SEQUENCE = Single(0x0040, 0xA043), "ConceptNameCodeSequence", SQ;
    DATE_TIME = Single(0x0040, 0xA120), "DateTime", DT;
    TEXT_VALUE = Single(0x0040, 0xA160), "TextValue", UT;
    FLOATING_POINT_VALUE = Single(0x0040, 0xA161), "FloatingPointValue", FD;
    RATIONAL_NUMERATOR_VALUE = Single(0x0040, 0xA162), "RationalNumeratorValue", SL;
    RATIONAL_DENOMINATOR_VALUE = Single(0x0040, 0xA163), "RationalDenominatorValue", UL;
    NUMERIC_VALUE = Single(0x0040, 0xA30A), "NumericValue", DS;
    CONTENT_SEQUENCE = Single(0x0040, 0xA730), "ContentSequence", SQ;
    POINT_COORDINATES_DATA = Single(0x0066, 0x0016), "PointCoordinatesData", OF;
    DOUBLE_POINT_COORDINATES_DATA = Single(0x0066, 0x0022), "DoublePointCoordinatesData", OD;
    LONG_PRIMITIVE_POINT_INDEX_LIST = Single(0x0066, 0x0040), "LongPrimitivePointIndexList", OL;
    SELECTOR_ATTRIBUTE = Single(0x0072, 0x0026), "SelectorAttribute", AT;
    SELECTOR_VALUE_NUMBER = Single(0x0072, 0x0028), "SelectorValueNumber", US;
    SELECTOR_AE_VALUE = Single(0x0072, 0x005E), "SelectorAEValue", AE;
    SELECTOR_AS_VALUE = Single(0x0072, 0x005F), "SelectorASValue", AS;
    SELECTOR_AT_VALUE = Single(0x0072, 0x0060), "SelectorATValue", AT;
    SELECTOR_DA_VALUE = Single(0x0072, 0x0061), "SelectorDAValue", DA;
    SELECTOR_CS_VALUE = Single(0x0072, 0x0062), "SelectorCSValue", CS;
    SELECTOR_DT_VALUE = Single(0x0072, 0x0063), "SelectorDTValue", DT;
    SELECTOR_IS_VALUE = Single(0x0072, 0x0064), "SelectorISValue", IS;
    SELECTOR_OB_VALUE = Single(0x0072, 0x0065), "SelectorOBValue", OB;
    SELECTOR_LO_VALUE = Single(0x0072, 0x0066), "SelectorLOValue", LO;
    SELECTOR_OF_VALUE = Single(0x0072, 0x0067), "SelectorOFValue", OF;
    SELECTOR_LT_VALUE = Single(0x0072, 0x0068), "SelectorLTValue", LT;
    SELECTOR_OW_VALUE = Single(0x0072, 0x0069), "SelectorOWValue", OW;
    SELECTOR_PN_VALUE = Single(0x0072, 0x006A), "SelectorPNValue", PN;
    SELECTOR_TM_VALUE = Single(0x0072, 0x006B), "SelectorTMValue", TM;
    SELECTOR_SH_VALUE = Single(0x0072, 0x006C), "SelectorSHValue", SH;
    SELECTOR_UN_VALUE = Single(0x0072, 0x006D), "SelectorUNValue", UN;
    SELECTOR_ST_VALUE = Single(0x0072, 0x006E), "SelectorSTValue", ST;
    SELECTOR_UC_VALUE = Single(0x0072, 0x006F), "SelectorUCValue", UC;
    SELECTOR_UT_VALUE = Single(0x0072, 0x0070), "SelectorUTValue", UT;
    SELECTOR_UR_VALUE = Single(0x0072, 0x0071), "SelectorURValue", UR;
    SELECTOR_DS_VALUE = Single(0x0072, 0x0072), "SelectorDSValue", DS;
    SELECTOR_OD_VALUE = Single(0x0072, 0x0073), "SelectorODValue", OD;
    SELECTOR_FD_VALUE = Single(0x0072, 0x0074), "SelectorFDValue", FD;
    SELECTOR_OL_VALUE = Single(0x0072, 0x0075), "SelectorOLValue", OL;
    SELECTOR_FL_VALUE = Single(0x0072, 0x0076), "SelectorFLValue", FL;
    SELECTOR_UL_VALUE = Single(0x0072, 0x0078), "SelectorULValue", UL;
    SELECTOR_US_VALUE = Single(0x0072, 0x007A), "SelectorUSValue", US;
    SELECTOR_SL_VALUE = Single(0x0072, 0x007C), "SelectorSLValue", SL;
    SELECTOR_SS_VALUE = Single(0x0072, 0x007E), "SelectorSSValue", SS;
    SELECTOR_UI_VALUE = Single(0x0072, 0x007F), "SelectorUIValue", UI;
    SELECTOR_CODE_SEQUENCE_VALUE = Single(0x0072, 0x0080), "SelectorCodeSequenceValue", SQ;
    SELECTOR_OV_VALUE = Single(0x0072, 0x0081), "SelectorOVValue", OV;
    SELECTOR_SV_VALUE = Single(0x0072, 0x0082), "SelectorSVValue", SV;
    SELECTOR_UV_VALUE = Single(0x0072, 0x0083), "SelectorUVValue", UV;
    OVERLAY_ROWS = Group100(0x6000, 0x0010), "OverlayRows", US;
    OVERLAY_COLUMNS = Group100(0x6000, 0x0011), "OverlayColumns", US;
    OVERLAY_DESCRIPTION = Group100(0x6000, 0x0022), "OverlayDescription", LO;
    OVERLAY_TYPE = Group100(0x6000, 0x0040), "OverlayType", CS;
    OVERLAY_ORIGIN = Group100(0x6000, 0x0050), "OverlayOrigin", SS;
    OVERLAY_BITS_ALLOCATED = Group100(0x6000, 0x0100), "OverlayBitsAllocated", US;
    OVERLAY_BIT_POSITION = Group100(0x6000, 0x0102), "OverlayBitPosition", US;
    OVERLAY_DATA = Group100(0x6000, 0x3000), "OverlayData", OW;
    EXTENDED_OFFSET_TABLE = Single(0x7FE0, 0x0001), "ExtendedOffsetTable", OV;
    EXTENDED_OFFSET_TABLE_LENGTHS = Single(0x7FE0, 0x0002), "ExtendedOffsetTableLengths", OV;
    FLOAT_PIXEL_DATA = Single(0x7FE0, 0x0008), "FloatPixelData", OF;
    DOUBLE_FLOAT_PIXEL_DATA = Single(0x7FE0, 0x0009), "DoubleFloatPixelData", OD;
    PIXEL_DATA = Single(0x7FE0, 0x0010), "PixelData", OW;
}
